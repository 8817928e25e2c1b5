//! Viewer configuration.
//!
//! Pixel metrics and layout constants. Defaults match a 8x16 monospace grid
//! inside an 800x600 window. Nothing here is persisted; the binary builds a
//! config from its command-line arguments.

use crate::app::WindowGeometry;

/// Bytes shown on one display line.
pub const GROUP_SIZE: usize = 16;

/// Default horizontal scroll bound, in columns.
pub const DEFAULT_HORIZONTAL_BOUND: usize = 100;

/// Pixel size of one text cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    /// Height of each line in pixels.
    pub line_height_px: u32,
    /// Width of each character in pixels.
    pub char_width_px: u32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            line_height_px: 16,
            char_width_px: 8,
        }
    }
}

impl Metrics {
    /// Build metrics, bumping zero sizes up to one pixel.
    pub fn new(line_height_px: u32, char_width_px: u32) -> Self {
        Self {
            line_height_px: line_height_px.max(1),
            char_width_px: char_width_px.max(1),
        }
    }
}

/// How the maximum horizontal scroll position is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalExtent {
    /// A fixed number of columns regardless of line width.
    Fixed(usize),
    /// The width of the widest line in the current view mode.
    WidestLine,
}

impl Default for HorizontalExtent {
    fn default() -> Self {
        Self::Fixed(DEFAULT_HORIZONTAL_BOUND)
    }
}

/// Layout and scrolling configuration for a viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    pub metrics: Metrics,
    /// Left inset of the text area in pixels.
    pub left_margin_px: u32,
    /// Top inset of the first line in pixels.
    pub top_margin_px: u32,
    /// Height subtracted from the window before computing the vertical page.
    pub vertical_inset_px: u32,
    pub horizontal_extent: HorizontalExtent,
    /// Window size assumed until the first resize arrives.
    pub initial_geometry: WindowGeometry,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            metrics: Metrics::default(),
            left_margin_px: 10,
            top_margin_px: 10,
            vertical_inset_px: 20,
            horizontal_extent: HorizontalExtent::default(),
            initial_geometry: WindowGeometry::new(800, 600),
        }
    }
}
