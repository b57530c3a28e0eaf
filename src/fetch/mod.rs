//! Single-URL fetch cycle: request, classify, name, persist.
//!
//! This module retrieves one resource over HTTP(S), decides whether it is
//! JSON or plain text, derives a timestamped filename from the URL, and
//! writes the raw response body into the configured output directory.
//!
//! # Features
//!
//! - Leading `@` marker stripped from input URLs
//! - Output directory created on demand
//! - Content-Type sniffing with a JSON-parse fallback
//! - `<base>_<YYYYMMDD_HHMMSS>.<json|txt>` filenames
//! - Existing files are never overwritten (numeric suffix on collision)
//!
//! # Example
//!
//! ```no_run
//! use grabber_core::fetch::{FetchConfig, Fetcher};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Fetcher::new(FetchConfig::new("./output"))?;
//! let saved = fetcher.fetch("@https://example.com/data.json").await?;
//! println!("File saved as: {}", saved.filename);
//! # Ok(())
//! # }
//! ```

mod classify;
mod client;
mod error;
pub mod filename;

pub use classify::{ContentKind, classify};
pub use client::{FetchConfig, FetchedFile, Fetcher};
pub use error::FetchError;
pub use filename::{base_name, derive_filename, format_timestamp, strip_marker};
