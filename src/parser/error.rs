//! Error types for URL extraction from files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a URL source file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8 text.
    #[error("{path} is not valid UTF-8 text")]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
    },
}

impl ExtractError {
    /// Classifies an IO error from reading `path` as text.
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::Decode { path }
        } else {
            Self::Read { path, source }
        }
    }
}
