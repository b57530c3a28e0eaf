//! Content classification for fetched bodies.

use std::fmt;

use serde::de::IgnoredAny;

/// Inferred kind of a fetched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Declared or parseable JSON.
    Json,
    /// Anything else.
    Text,
}

impl ContentKind {
    /// File extension (without the dot) used for saved files of this kind.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Classifies a response as JSON or plain text.
///
/// The declared Content-Type wins when it mentions `json`. Otherwise the
/// body is probed with a full JSON parse; any parse failure means [`ContentKind::Text`].
/// This is a heuristic, not a format validator.
#[must_use]
pub fn classify(content_type: Option<&str>, body: &[u8]) -> ContentKind {
    if content_type.is_some_and(|ct| ct.contains("json")) || is_json(body) {
        ContentKind::Json
    } else {
        ContentKind::Text
    }
}

fn is_json(body: &[u8]) -> bool {
    serde_json::from_slice::<IgnoredAny>(body).is_ok()
}
