//! Rendering and viewport management.
//!
//! - `line` - Per-mode line formatting
//! - `scroll` - Scroll range derivation and the viewport state machine
//! - `render` - Visible-line iteration for a paint

pub mod line;
mod render;
mod scroll;

pub use line::{format_line, is_printable, line_count, line_width, printable_char};
pub use render::Renderer;
pub use scroll::{
    ScrollRange, ScrollRangeCalculator, ScrollRanges, ViewportController, ViewportState,
};
