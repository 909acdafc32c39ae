//! Error types for the I/O edges of the library.
//!
//! Parsing itself never fails; only reading song files, decoding bytes and
//! exporting JSON can.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the file, bytes and export entry points.
#[derive(Debug, Error)]
pub enum ChordError {
    /// A song file or directory could not be read
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Song bytes are not valid UTF-8
    #[error("Invalid UTF-8 in song file: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// JSON serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChordError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChordError::Io {
            path: path.into(),
            source,
        }
    }
}
