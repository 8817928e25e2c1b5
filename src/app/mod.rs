//! Viewer state and event types.
//!
//! This module contains the core application state structures:
//! - `ViewerState` - The single owner of file, view mode and viewport
//! - `ViewerEvent` - Tagged input events consumed by `ViewerState::dispatch`
//! - `ViewMode` - Available text representations
//! - `DrawText` / `TextSink` - Paint output and the drawing primitive

mod state;
mod types;

pub use state::ViewerState;
pub use types::{
    DrawText, Invalidate, ScrollAxis, ScrollUnit, TextSink, ViewMode, ViewerEvent,
    WindowGeometry,
};
