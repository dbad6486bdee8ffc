// src/model/blocks.rs
//! Content blocks attached to a page at creation time.
//!
//! Blocks are recursive: text-bearing variants carry nested children inside
//! their type payload, exactly as the create endpoint expects them. The
//! serialized form is the API's internally tagged shape,
//! `{"type": "paragraph", "paragraph": {...}}`.

use crate::types::RichTextItem;
use serde::{Deserialize, Serialize};

/// A unit of renderable content nested under a page.
///
/// `Typed` covers the block kinds this client constructs itself. `Raw` passes
/// a caller-prepared JSON block through untouched — the replicate-a-template
/// flow fetches blocks elsewhere, strips their read-only fields, and feeds
/// them straight back into a create call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Block {
    Typed(TypedBlock),
    Raw(serde_json::Value),
}

/// The block kinds with first-class constructors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TypedBlock {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: TextBlockContent },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: TextBlockContent },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: TextBlockContent },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: TextBlockContent },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: TextBlockContent },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: TextBlockContent },
    #[serde(rename = "to_do")]
    ToDo { to_do: ToDoContent },
    #[serde(rename = "toggle")]
    Toggle { toggle: TextBlockContent },
    #[serde(rename = "quote")]
    Quote { quote: TextBlockContent },
    #[serde(rename = "divider")]
    Divider { divider: EmptyContent },
}

/// Text content shared by most block kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Block>,
}

impl TextBlockContent {
    fn from_text(text: impl Into<String>) -> Self {
        Self {
            rich_text: vec![RichTextItem::plain_text(text)],
            children: Vec::new(),
        }
    }
}

/// To-do content — text plus the checked flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToDoContent {
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub checked: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<Block>,
}

/// Payload for blocks that carry no data; serializes to `{}` as the API
/// requires.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmptyContent {}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Typed(TypedBlock::Paragraph {
            paragraph: TextBlockContent::from_text(text),
        })
    }

    #[allow(dead_code)]
    pub fn heading_1(text: impl Into<String>) -> Self {
        Block::Typed(TypedBlock::Heading1 {
            heading_1: TextBlockContent::from_text(text),
        })
    }

    #[allow(dead_code)]
    pub fn heading_2(text: impl Into<String>) -> Self {
        Block::Typed(TypedBlock::Heading2 {
            heading_2: TextBlockContent::from_text(text),
        })
    }

    #[allow(dead_code)]
    pub fn heading_3(text: impl Into<String>) -> Self {
        Block::Typed(TypedBlock::Heading3 {
            heading_3: TextBlockContent::from_text(text),
        })
    }

    #[allow(dead_code)]
    pub fn bulleted_list_item(text: impl Into<String>) -> Self {
        Block::Typed(TypedBlock::BulletedListItem {
            bulleted_list_item: TextBlockContent::from_text(text),
        })
    }

    #[allow(dead_code)]
    pub fn numbered_list_item(text: impl Into<String>) -> Self {
        Block::Typed(TypedBlock::NumberedListItem {
            numbered_list_item: TextBlockContent::from_text(text),
        })
    }

    #[allow(dead_code)]
    pub fn to_do(text: impl Into<String>, checked: bool) -> Self {
        Block::Typed(TypedBlock::ToDo {
            to_do: ToDoContent {
                rich_text: vec![RichTextItem::plain_text(text)],
                checked,
                children: Vec::new(),
            },
        })
    }

    #[allow(dead_code)]
    pub fn toggle(text: impl Into<String>) -> Self {
        Block::Typed(TypedBlock::Toggle {
            toggle: TextBlockContent::from_text(text),
        })
    }

    #[allow(dead_code)]
    pub fn quote(text: impl Into<String>) -> Self {
        Block::Typed(TypedBlock::Quote {
            quote: TextBlockContent::from_text(text),
        })
    }

    #[allow(dead_code)]
    pub fn divider() -> Self {
        Block::Typed(TypedBlock::Divider {
            divider: EmptyContent {},
        })
    }

    /// A caller-prepared block, passed through as-is.
    #[allow(dead_code)]
    pub fn raw(value: serde_json::Value) -> Self {
        Block::Raw(value)
    }

    /// Attach nested children to a text-bearing block.
    ///
    /// Dividers and raw blocks have no typed children slot; for those the
    /// call leaves the block unchanged.
    #[allow(dead_code)]
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        if let Block::Typed(node) = &mut self {
            match node {
                TypedBlock::Paragraph { paragraph: c }
                | TypedBlock::Heading1 { heading_1: c }
                | TypedBlock::Heading2 { heading_2: c }
                | TypedBlock::Heading3 { heading_3: c }
                | TypedBlock::BulletedListItem {
                    bulleted_list_item: c,
                }
                | TypedBlock::NumberedListItem {
                    numbered_list_item: c,
                }
                | TypedBlock::Toggle { toggle: c }
                | TypedBlock::Quote { quote: c } => c.children = children,
                TypedBlock::ToDo { to_do } => to_do.children = children,
                TypedBlock::Divider { .. } => {}
            }
        }
        self
    }

    /// The API type tag for this block, if it is one of the typed kinds.
    #[allow(dead_code)]
    pub fn block_type(&self) -> Option<&'static str> {
        match self {
            Block::Typed(TypedBlock::Paragraph { .. }) => Some("paragraph"),
            Block::Typed(TypedBlock::Heading1 { .. }) => Some("heading_1"),
            Block::Typed(TypedBlock::Heading2 { .. }) => Some("heading_2"),
            Block::Typed(TypedBlock::Heading3 { .. }) => Some("heading_3"),
            Block::Typed(TypedBlock::BulletedListItem { .. }) => Some("bulleted_list_item"),
            Block::Typed(TypedBlock::NumberedListItem { .. }) => Some("numbered_list_item"),
            Block::Typed(TypedBlock::ToDo { .. }) => Some("to_do"),
            Block::Typed(TypedBlock::Toggle { .. }) => Some("toggle"),
            Block::Typed(TypedBlock::Quote { .. }) => Some("quote"),
            Block::Typed(TypedBlock::Divider { .. }) => Some("divider"),
            Block::Raw(_) => None,
        }
    }
}
