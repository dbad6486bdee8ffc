// src/api/client.rs
//! Pure HTTP client wrapper for the Notion API.
//!
//! This module provides a thin wrapper around reqwest for making
//! authenticated requests to the Notion API. Parsing and classification
//! live in `parser`; this layer only moves bytes.

use crate::constants::{API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, NOTION_API_VERSION};
use crate::error::AppError;
use crate::model::{CreatedPage, PageRequest, Parent};
use crate::types::Credentials;
use reqwest::{header, Client, Response};
use serde::Serialize;
use std::time::Duration;

/// A thin wrapper around reqwest Client for Notion API requests.
///
/// Credentials are fixed at construction and immutable afterwards; each call
/// is an independent request/response exchange, so the client is freely
/// shareable across concurrent callers.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    credentials: Credentials,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with the default request timeout.
    pub fn new(credentials: Credentials) -> Result<Self, AppError> {
        Self::with_timeout(
            credentials,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Creates a new HTTP client with an explicit request timeout.
    ///
    /// Timeout expiry surfaces as a transport failure, the same as any
    /// other network error.
    pub fn with_timeout(credentials: Credentials, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(&credentials)?)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            credentials,
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(credentials: &Credentials) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", credentials.api_key().as_str());
        let mut auth_value = header::HeaderValue::from_str(&auth_header).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// The parent reference for the configured target database.
    pub fn database_parent(&self) -> Parent {
        Parent::database(self.credentials.database_id().clone())
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The API endpoint path (without base URL)
    /// * `body` - The request body to serialize as JSON
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::PageWriter for NotionHttpClient {
    async fn create_page(&self, request: &PageRequest) -> Result<CreatedPage, AppError> {
        let response = self.post("pages", request).await?;
        let result = extract_response_text(response).await?;
        let created = super::parser::parse_create_page_response(result)?;
        log::info!("Created page {}", created.id);
        Ok(created)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
