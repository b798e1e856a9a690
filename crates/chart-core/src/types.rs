// File: crates/chart-core/src/types.rs
// Summary: Shared viewport constants and margins.

/// Default viewBox width in pixels.
pub const WIDTH: u32 = 640;
/// Default viewBox height in pixels.
pub const HEIGHT: u32 = 240;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(40, 30, 20, 30)
    }
}
