// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark chart colors shared by the SVG and PNG renderers.

use skia_safe as skia;

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form for SVG attributes.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(255, self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub grid: Rgb,
    pub axis_label: Rgb,
    pub data_stroke: Rgb,
    pub threshold_stroke: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb(0xff, 0xff, 0xff),
            grid: Rgb(0xdc, 0xdc, 0xdc),
            axis_label: Rgb(0x6e, 0x6e, 0x6e),
            data_stroke: Rgb(0x22, 0x63, 0x98),
            threshold_stroke: Rgb(0xd4, 0x70, 0x24),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgb(18, 18, 20),
            grid: Rgb(60, 60, 66),
            axis_label: Rgb(200, 200, 210),
            data_stroke: Rgb(64, 160, 255),
            threshold_stroke: Rgb(240, 140, 60),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
