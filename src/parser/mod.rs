//! Input parsing: pulling URLs out of free-form text files.
//!
//! The scan is a regex heuristic, not URL-grammar validation. Anything that
//! starts with `http://` or `https://` and runs up to whitespace, `)` or `"`
//! is taken as a URL; the fetcher rejects what does not parse.

mod error;
mod url;

use std::path::Path;

use tracing::{debug, instrument};

pub use self::error::ExtractError;
pub use self::url::extract_urls;

/// Reads `path` as UTF-8 text and extracts its URLs.
///
/// # Errors
///
/// Returns [`ExtractError::Read`] when the file cannot be read and
/// [`ExtractError::Decode`] when it is not valid UTF-8.
#[instrument]
pub fn read_urls(path: &Path) -> Result<Vec<String>, ExtractError> {
    let content = std::fs::read_to_string(path).map_err(|e| ExtractError::from_io(path, e))?;
    let urls = extract_urls(&content);
    debug!(count = urls.len(), "extracted URLs");
    Ok(urls)
}

/// Extracts URLs from a file, reporting read failures instead of returning them.
///
/// On any read or decode failure an error line is printed and an empty list
/// is returned, which callers treat the same as a file without URLs.
#[must_use]
pub fn extract_urls_from_file(path: &Path) -> Vec<String> {
    match read_urls(path) {
        Ok(urls) => urls,
        Err(e) => {
            println!("Error reading file {}: {e}", path.display());
            Vec::new()
        }
    }
}
