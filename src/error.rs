//! Error types for the viewer core.

use std::path::PathBuf;

use thiserror::Error;

/// Viewer error type.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The file could not be opened or read.
    #[error("failed to load {}: {source}", path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
