// src/lib.rs
//! notion-pagewriter library — creates pages (database rows) in Notion via the REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration** — `WriterConfig`
//! - **Domain model** — `PageRequest`, `PageProperties`, `Block`, `Parent`, `CreatedPage`
//! - **Domain types** — `ApiKey`, `Credentials`, `DatabaseId`, `PageId`, `RichTextItem`
//! - **API client** — `PageWriter`, `NotionHttpClient`, `parse_create_page_response`
//!
//! One call, one result:
//! ```ignore
//! let client = NotionHttpClient::new(credentials)?;
//! let request = PageRequest::new(
//!     PageProperties::new()
//!         .with_title("Imp Name", "Trial 1")
//!         .with_number("Crazy Number", 1234.0)
//!         .with_select("Options", "Option 1"),
//! )
//! .in_database(database_id);
//! let page = client.create_page(&request).await?;
//! ```

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod error;
mod model;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, WriterConfig};

// --- Domain Model ---
pub use crate::model::{
    Block, CreatedPage, PageProperties, PageProperty, PageRequest, Parent, PropertyName,
    SelectOption, TextBlockContent, ToDoContent, TypedBlock,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, Credentials, DatabaseId, Link, PageId, RichTextItem, TextContent,
};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse, parser::parse_create_page_response, NotionHttpClient, PageWriter,
};
