//! Core types shared by the viewer components and the front end.

use std::path::PathBuf;

// =============================================================================
// View Mode
// =============================================================================

/// Textual representation used to render the loaded file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum ViewMode {
    /// Hex pairs followed by an ASCII gutter.
    #[default]
    Hex,
    /// Eight binary digits per byte.
    Binary,
    /// Printable characters only.
    Ascii,
}

impl ViewMode {
    /// Get display name for the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "Hex",
            Self::Binary => "Binary",
            Self::Ascii => "ASCII",
        }
    }

    /// Get all available modes.
    pub fn all() -> &'static [Self] {
        &[Self::Hex, Self::Binary, Self::Ascii]
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Client area size reported by the window host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WindowGeometry {
    pub width_px: u32,
    pub height_px: u32,
}

impl WindowGeometry {
    pub const fn new(width_px: u32, height_px: u32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Scrollbar axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAxis {
    Vertical,
    Horizontal,
}

/// Scroll request delivered by the scrollbar host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollUnit {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    /// Jump to the first position.
    Home,
    /// Jump to the last position.
    End,
    /// Thumb drag or other direct positioning.
    Absolute(usize),
}

/// Input event routed by [`ViewerState::dispatch`](super::ViewerState::dispatch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Read `path` and show it in `mode`.
    Load { path: PathBuf, mode: ViewMode },
    Scroll { axis: ScrollAxis, unit: ScrollUnit },
    Resize { geometry: WindowGeometry },
    Paint,
}

/// What the host has to do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invalidate {
    /// Nothing visible changed.
    None,
    /// The whole viewport must be repainted.
    Full,
}

impl Invalidate {
    pub fn needs_redraw(self) -> bool {
        self == Self::Full
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// One positioned line of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawText {
    /// Left edge in pixels; negative once scrolled horizontally.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    pub text: String,
}

/// Text drawing primitive provided by the window host.
pub trait TextSink {
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
}

impl TextSink for Vec<DrawText> {
    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.push(DrawText {
            x,
            y,
            text: text.to_string(),
        });
    }
}
