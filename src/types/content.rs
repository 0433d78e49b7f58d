use serde::{Deserialize, Serialize};

/// One unit of content in a classification request — the canonical wire
/// representation.
///
/// Serializes as `{"type": "text", "content": "..."}` or
/// `{"type": "image", "content": "<base64>"}`. Order within a request is
/// significant: the service analyzes all items jointly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { content: String },
    Image { content: String },
}

impl ContentItem {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// Build an image item from already base64-encoded bytes.
    pub fn image(base64_data: impl Into<String>) -> Self {
        Self::Image {
            content: base64_data.into(),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Text { content } | Self::Image { content } => content,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

/// Caller-supplied content for a classification request.
///
/// `Single` and `Items` go through content detection: strings starting with
/// `http://` or `https://` are downloaded, strings naming an existing local
/// file are read from disk, and everything else is sent as literal text.
/// `Raw` skips detection entirely and sends the items as given — use it to
/// classify literal text that would otherwise be mistaken for a path, e.g.
/// `"photo.jpg"`.
#[derive(Clone, Debug)]
pub enum Content {
    /// A single string (text, file path, or URL).
    Single(String),
    /// An ordered list of strings, file paths, and URLs (mixed freely).
    Items(Vec<String>),
    /// Pre-formed content items, passed through without reinterpretation.
    Raw(Vec<ContentItem>),
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for Content {
    fn from(items: Vec<String>) -> Self {
        Self::Items(items)
    }
}

impl From<Vec<&str>> for Content {
    fn from(items: Vec<&str>) -> Self {
        Self::Items(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Content {
    fn from(items: &[&str]) -> Self {
        Self::Items(items.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<ContentItem>> for Content {
    fn from(items: Vec<ContentItem>) -> Self {
        Self::Raw(items)
    }
}
