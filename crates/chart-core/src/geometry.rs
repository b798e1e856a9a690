// File: crates/chart-core/src/geometry.rs
// Summary: Plot-rectangle math and SVG path-data generation.

use std::fmt::Write as _;

use crate::types::Insets;

/// Plot area inside the viewport margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub fn from_insets(width: u32, height: u32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f64,
            top: insets.top as f64,
            right: width as f64 - insets.right as f64,
            bottom: height as f64 - insets.bottom as f64,
        }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Coordinate text rounded to three decimals, without trailing zeros or "-0".
pub fn fmt_num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        return "0".to_string();
    }
    format!("{r}")
}

/// Path data for a polyline through `points`: `M x,y L x,y ...`.
/// Empty input yields an empty string.
pub fn line_path<I>(points: I) -> String
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut d = String::new();
    for (i, (x, y)) in points.into_iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{},{}", fmt_num(x), fmt_num(y));
    }
    d
}
