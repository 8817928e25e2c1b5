//! Loaded file content.
//!
//! A [`ByteSource`] is read fully into memory before it replaces the previous
//! one, so a half-read file is never observable by the renderer.

use std::path::{Path, PathBuf};

use crate::error::{Result, ViewerError};

/// Reads whole files for the viewer.
///
/// The front end uses [`FsReader`]; tests substitute readers that fail or
/// serve canned bytes.
pub trait FileReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads files from the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Immutable content of one loaded file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteSource {
    bytes: Vec<u8>,
    path: Option<PathBuf>,
}

impl ByteSource {
    /// Read `path` through `reader`.
    pub fn load(reader: &dyn FileReader, path: &Path) -> Result<Self> {
        let bytes = reader.read(path).map_err(|source| ViewerError::LoadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            bytes,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap bytes that did not come from a file.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            path: None,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name for display, falling back to "Untitled".
    pub fn title(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled")
            .to_string()
    }
}
