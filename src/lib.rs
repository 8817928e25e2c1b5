//! hexlens - hex, binary and ASCII file viewer.
//!
//! This library holds the viewer core:
//! - Loading a file into an immutable [`source::ByteSource`]
//! - Formatting 16-byte groups into display lines per [`app::ViewMode`]
//! - Deriving scrollbar ranges and clamping the scroll position
//! - Producing positioned text for the visible part of the file
//!
//! The `hexlens` binary wraps it in an `eframe` window.

pub mod app;
pub mod config;
pub mod error;
pub mod source;
pub mod util;
pub mod view;

pub use app::{ViewMode, ViewerEvent, ViewerState};
pub use error::{Result, ViewerError};
