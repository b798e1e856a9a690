// File: crates/chart-core/tests/theme.rs
// Purpose: Theme lookup and color formatting.

use weather_chart::theme::{find, presets, Rgb};
use weather_chart::Theme;

#[test]
fn find_is_case_insensitive_with_light_fallback() {
    assert_eq!(find("DARK").name, "dark");
    assert_eq!(find("no-such-theme"), Theme::light());
    assert_eq!(presets().len(), 2);
}

#[test]
fn hex_is_lowercase_rrggbb() {
    assert_eq!(Rgb(0xD4, 0x70, 0x24).hex(), "#d47024");
    assert_eq!(Theme::light().grid.hex(), "#dcdcdc");
}
