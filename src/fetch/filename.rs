//! Filename derivation for fetched resources.
//!
//! Saved files are named `<base>_<YYYYMMDD_HHMMSS>.<ext>`, where `<base>` is
//! the last URL path segment without its extension.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, TimeZone};
use url::Url;

use super::classify::ContentKind;

/// Base name used when the URL path has no usable last segment.
pub const FALLBACK_BASE_NAME: &str = "download";

/// `strftime` pattern for the filename timestamp (second granularity).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Removes a single leading `@` marker, if present.
#[must_use]
pub fn strip_marker(url: &str) -> &str {
    url.strip_prefix('@').unwrap_or(url)
}

/// Returns the extension-less, filesystem-safe base name for a URL.
///
/// Falls back to [`FALLBACK_BASE_NAME`] when the path is empty or ends in `/`.
#[must_use]
pub fn base_name(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");
    if segment.is_empty() {
        return FALLBACK_BASE_NAME.to_string();
    }

    let decoded = urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment));
    let sanitized = sanitize_filename(&decoded);
    let stem = strip_extension(&sanitized);
    if stem.is_empty() {
        FALLBACK_BASE_NAME.to_string()
    } else {
        stem.to_string()
    }
}

/// Formats a wall-clock instant as `YYYYMMDD_HHMMSS`.
#[must_use]
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Builds the full output filename for a fetched URL.
#[must_use]
pub fn derive_filename<Tz>(url: &Url, kind: ContentKind, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    format!(
        "{}_{}.{}",
        base_name(url),
        format_timestamp(at),
        kind.extension()
    )
}

/// Inserts a numeric collision suffix before the extension: `a_1.txt`.
pub(crate) fn with_collision_suffix(filename: &str, n: u32) -> String {
    match filename.rfind('.') {
        Some(pos) => format!("{}_{n}{}", &filename[..pos], &filename[pos..]),
        None => format!("{filename}_{n}"),
    }
}

/// Drops the last extension, ignoring dots that only lead the name.
///
/// `a.tar.gz` -> `a.tar`, `.bashrc` -> `.bashrc`, `name.` -> `name`.
fn strip_extension(name: &str) -> &str {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(pos) => &name[..leading_dots + pos],
        None => name,
    }
}

/// Replaces characters that are invalid on common filesystems:
/// / \ : * ? " < > |
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
