//! URL extraction from text input.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{instrument, trace};

/// Regex pattern for finding URLs in text.
/// Matches http:// and https:// followed by anything up to whitespace, `)` or `"`.
#[allow(clippy::expect_used)]
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s)"]+"#).expect("URL regex is valid") // Static pattern, safe to panic
});

/// Extracts every HTTP/HTTPS URL embedded in `input`.
///
/// Matches are returned in order of appearance, non-overlapping, with
/// duplicates kept. Nothing is validated or trimmed: trailing sentence
/// punctuation such as `.` or `,` stays part of the match.
///
/// # Examples
///
/// ```
/// use grabber_core::parser::extract_urls;
///
/// let urls = extract_urls("see http://a.com/x and https://b.com/y.");
/// assert_eq!(urls, vec!["http://a.com/x", "https://b.com/y."]);
/// ```
#[instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn extract_urls(input: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(input)
        .map(|m| {
            trace!(url = m.as_str(), "found URL");
            m.as_str().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_urls_sentence_keeps_trailing_dot() {
        let urls = extract_urls("see http://a.com/x and https://b.com/y.");
        assert_eq!(urls, vec!["http://a.com/x", "https://b.com/y."]);
    }

    #[test]
    fn test_extract_urls_no_urls() {
        assert!(extract_urls("This is just plain text with no URLs").is_empty());
        assert!(extract_urls("").is_empty());
    }

    #[test]
    fn test_extract_urls_ignores_schemeless_and_other_schemes() {
        assert!(extract_urls("Go to example.com for more info").is_empty());
        assert!(extract_urls("ftp://files.example.com/a.txt").is_empty());
    }

    #[test]
    fn test_extract_urls_preserves_order_and_duplicates() {
        let input = "https://first.com\nhttps://second.com https://first.com";
        assert_eq!(
            extract_urls(input),
            vec!["https://first.com", "https://second.com", "https://first.com"]
        );
    }

    #[test]
    fn test_extract_urls_stops_at_close_paren() {
        assert_eq!(
            extract_urls("(see https://example.com/doc.json)"),
            vec!["https://example.com/doc.json"]
        );
        // Balanced parens are not special-cased.
        assert_eq!(
            extract_urls("https://en.wikipedia.org/wiki/URL_(disambiguation)"),
            vec!["https://en.wikipedia.org/wiki/URL_(disambiguation"]
        );
    }

    #[test]
    fn test_extract_urls_stops_at_double_quote() {
        assert_eq!(
            extract_urls(r#"<a href="https://example.com/a.json">link</a>"#),
            vec!["https://example.com/a.json"]
        );
    }

    #[test]
    fn test_extract_urls_single_quote_and_brackets_are_kept() {
        assert_eq!(
            extract_urls("'https://example.com/a'"),
            vec!["https://example.com/a'"]
        );
        assert_eq!(
            extract_urls("[https://example.com/a]"),
            vec!["https://example.com/a]"]
        );
    }

    #[test]
    fn test_extract_urls_markdown_link() {
        assert_eq!(
            extract_urls("[data](https://api.example.com/v1/items.json)"),
            vec!["https://api.example.com/v1/items.json"]
        );
    }

    #[test]
    fn test_extract_urls_marker_prefix_is_not_part_of_match() {
        assert_eq!(
            extract_urls("@https://example.com/a.json"),
            vec!["https://example.com/a.json"]
        );
    }

    #[test]
    fn test_extract_urls_query_fragment_and_port() {
        assert_eq!(
            extract_urls("https://localhost:8080/search?q=rust&page=1#top,"),
            vec!["https://localhost:8080/search?q=rust&page=1#top,"]
        );
    }

    #[test]
    fn test_extract_urls_bare_scheme_needs_one_char() {
        assert!(extract_urls("http:// nothing").is_empty());
    }
}
