//! Grabber Core Library
//!
//! This library provides the core functionality for the grabber tool, which
//! fetches remote resources by URL, classifies them as JSON or plain text,
//! and saves them under timestamped filenames.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`fetch`] - HTTP fetch, content classification and file persistence
//! - [`parser`] - URL extraction from free-form text files

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod fetch;
pub mod parser;

// Re-export commonly used types
pub use fetch::{ContentKind, FetchConfig, FetchError, FetchedFile, Fetcher, classify};
pub use parser::{ExtractError, extract_urls, extract_urls_from_file, read_urls};
