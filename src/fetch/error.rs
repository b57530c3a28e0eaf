//! Error types for the fetch module.
//!
//! Every way a single URL can fail to produce a file is represented here, so
//! callers get a value back instead of a panic and can move on to the next URL.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching and saving one URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The input could not be parsed as an absolute HTTP/HTTPS URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as given (after marker stripping).
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Non-success HTTP response.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// File system error creating the output directory or writing the body.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Every collision-suffixed candidate name was already taken.
    #[error("no free filename for {filename} in {dir}")]
    NameExhausted {
        /// Output directory.
        dir: PathBuf,
        /// The derived filename that kept colliding.
        filename: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a network error, promoting client timeouts to [`FetchError::Timeout`].
    pub fn from_request(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { url: url.into() }
        } else {
            Self::Network {
                url: url.into(),
                source,
            }
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for failures on the request side (as opposed to local disk).
    #[must_use]
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl { .. }
                | Self::Network { .. }
                | Self::Timeout { .. }
                | Self::HttpStatus { .. }
        )
    }
}

// No `From<reqwest::Error>` / `From<std::io::Error>`: every variant needs the
// URL or path that the source error does not carry.
