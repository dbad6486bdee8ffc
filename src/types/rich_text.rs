// src/types/rich_text.rs
//! Rich text as the create-page endpoint accepts it.
//!
//! The write path only ever sends the `text` variant: a content string with
//! an optional link and optional annotations. Read-side fields the API would
//! echo back (`plain_text`, `href`) are not part of the request shape.

use serde::{Deserialize, Serialize};

/// One segment of rich text in a title, rich-text property, or block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text: TextContent,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub annotations: Option<Annotations>,
}

impl RichTextItem {
    /// Create a plain text segment — the most common rich text variant.
    ///
    /// This is the vocabulary for constructing rich text in builders and
    /// tests. Instead of a struct literal full of Nones, just:
    /// ```ignore
    /// RichTextItem::plain_text("hello")
    /// ```
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: text.into(),
                link: None,
            },
            annotations: None,
        }
    }

    /// Create a text segment linking to a URL.
    #[allow(dead_code)]
    pub fn linked_text(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: text.into(),
                link: Some(Link { url: url.into() }),
            },
            annotations: None,
        }
    }
}

/// The content payload of a text segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Formatting annotations on a text segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_serializes_to_minimal_wire_shape() {
        let item = RichTextItem::plain_text("Trial 1");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, serde_json::json!({ "text": { "content": "Trial 1" } }));
    }

    #[test]
    fn linked_text_carries_url() {
        let item = RichTextItem::linked_text("docs", "https://example.com");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": { "content": "docs", "link": { "url": "https://example.com" } }
            })
        );
    }
}
