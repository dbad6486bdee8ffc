// src/api/mod.rs
//! Notion API interaction — the ability to create pages in a workspace.
//!
//! This module provides a data-oriented interface to the create-page
//! endpoint, with clear separation between I/O operations and parsing.

pub mod client;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::{CreatedPage, PageRequest};

/// The ability to create pages against a Notion workspace.
///
/// This is the fundamental algebra for API interaction. Calling code depends
/// on this trait, never on HTTP details — tests substitute their own
/// implementations without touching the network.
#[async_trait::async_trait]
pub trait PageWriter: Send + Sync {
    /// Sends one page-creation request and interprets the response.
    ///
    /// Exactly one of success-with-identifier or typed-error comes back;
    /// there is no local retry. If the reply cannot be understood the remote
    /// may still have created the page — that ambiguity is the caller's to
    /// handle.
    async fn create_page(&self, request: &PageRequest) -> Result<CreatedPage, AppError>;
}

// Re-export the public interface
pub use client::{extract_response_text, ApiResponse, NotionHttpClient};
