// src/model/properties.rs
//! The property mapping sent under `properties` in a page-creation request.
//!
//! The client treats this mapping opaquely: property names and value shapes
//! must match the target database's schema, and only the remote service can
//! verify that. Mismatches come back as a `validation_error`.

use crate::types::RichTextItem;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a page property — a column in the target database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyName(String);

impl PropertyName {
    #[allow(dead_code)]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PropertyName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for PropertyName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A single select option, chosen from the set defined by the remote schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A typed property value descriptor.
///
/// The variants cover the value shapes this client constructs itself; `Other`
/// passes any caller-built JSON value through untouched, keeping the mapping
/// opaque for shapes the typed layer does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageProperty {
    Title { title: Vec<RichTextItem> },
    Number { number: f64 },
    Select { select: SelectOption },
    Other(serde_json::Value),
}

impl PageProperty {
    /// A title value from a single plain-text segment.
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title {
            title: vec![RichTextItem::plain_text(text)],
        }
    }

    /// A title value from pre-built rich text segments, order preserved.
    #[allow(dead_code)]
    pub fn title_segments(segments: Vec<RichTextItem>) -> Self {
        Self::Title { title: segments }
    }

    pub fn number(value: f64) -> Self {
        Self::Number { number: value }
    }

    pub fn select(option: impl Into<String>) -> Self {
        Self::Select {
            select: SelectOption::named(option),
        }
    }
}

/// Ordered mapping from property name to value descriptor.
///
/// Insertion order is preserved through serialization so request bodies are
/// stable and diffable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageProperties(IndexMap<PropertyName, PageProperty>);

impl PageProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property, builder-style.
    pub fn with(mut self, name: impl Into<PropertyName>, value: PageProperty) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Shorthand for the title column.
    pub fn with_title(self, name: impl Into<PropertyName>, text: impl Into<String>) -> Self {
        self.with(name, PageProperty::title(text))
    }

    /// Shorthand for a number column.
    pub fn with_number(self, name: impl Into<PropertyName>, value: f64) -> Self {
        self.with(name, PageProperty::number(value))
    }

    /// Shorthand for a select column.
    pub fn with_select(self, name: impl Into<PropertyName>, option: impl Into<String>) -> Self {
        self.with(name, PageProperty::select(option))
    }

    #[allow(dead_code)]
    pub fn insert(&mut self, name: impl Into<PropertyName>, value: PageProperty) {
        self.0.insert(name.into(), value);
    }

    #[allow(dead_code)]
    pub fn get(&self, name: &PropertyName) -> Option<&PageProperty> {
        self.0.get(name)
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyName, &PageProperty)> {
        self.0.iter()
    }
}
