// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, dpi, font sizes, paddings).

/// Default surface width in pixels (8 in at 100 dpi).
pub const WIDTH: i32 = 800;
/// Default surface height in pixels (6 in at 100 dpi).
pub const HEIGHT: i32 = 600;
/// Pixels per inch used when sizing a figure in inches.
pub const DPI: f32 = 100.0;

pub const TICK_FONT_PX: f32 = 12.0;
pub const LABEL_FONT_PX: f32 = 14.0;
pub const TITLE_FONT_PX: f32 = 17.0;

/// Screen margins, in pixels.
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
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    // Room for tick labels plus the rotated y label on the left, title on top.
    fn default() -> Self {
        Self::new(80, 24, 44, 60)
    }
}
