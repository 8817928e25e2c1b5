//! Utility functions shared across the application.
//!
//! This module provides common utilities for:
//! - Interface colors
//! - Size formatting

pub mod color;
pub mod format;

pub use color::*;
pub use format::{file_summary, format_bytes};
