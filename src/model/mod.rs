pub mod blocks;
pub mod properties;

pub use blocks::{Block, EmptyContent, TextBlockContent, ToDoContent, TypedBlock};
pub use properties::{PageProperties, PageProperty, PropertyName, SelectOption};

use crate::types::{DatabaseId, PageId};
use serde::{Deserialize, Serialize};

/// Parent reference with typed IDs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parent {
    #[serde(rename = "database_id")]
    Database { database_id: DatabaseId },
    #[serde(rename = "page_id")]
    Page { page_id: PageId },
}

impl Parent {
    pub fn database(id: DatabaseId) -> Self {
        Parent::Database { database_id: id }
    }

    #[allow(dead_code)]
    pub fn page(id: PageId) -> Self {
        Parent::Page { page_id: id }
    }
}

/// Everything a single page-creation call sends.
///
/// `parent` and `children` are optional; when absent the serialized body
/// omits the keys entirely rather than sending `null`. A request without a
/// parent is forwarded as-is — whether the remote can infer the target is its
/// call, and its refusal comes back as a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent: Option<Parent>,
    pub properties: PageProperties,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub children: Option<Vec<Block>>,
}

impl PageRequest {
    pub fn new(properties: PageProperties) -> Self {
        Self {
            parent: None,
            properties,
            children: None,
        }
    }

    /// Target a database as the parent — one row per created page.
    pub fn in_database(mut self, id: DatabaseId) -> Self {
        self.parent = Some(Parent::database(id));
        self
    }

    /// Target an existing page as the parent.
    #[allow(dead_code)]
    pub fn under_page(mut self, id: PageId) -> Self {
        self.parent = Some(Parent::page(id));
        self
    }

    /// Attach content blocks, order preserved.
    ///
    /// The API caps a single create at `MAX_CHILDREN_PER_CREATE` (100)
    /// blocks; no local check is made, the remote rejects oversized requests.
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = Some(children);
        self
    }
}

/// The outcome of a successful create call.
///
/// The identifier is kept opaque — whatever string the API returned — and the
/// full response body rides along for anything the typed layer does not model.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPage {
    pub id: String,
    pub url: Option<String>,
    #[allow(dead_code)] // Inspected by lib consumers, not the bin wrapper
    pub body: serde_json::Value,
}
