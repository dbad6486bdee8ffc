// src/api/parser.rs
//! Response classification for the create-page call.
//!
//! The success/error decision is made exactly once, here, on the body's
//! `object` discriminator — callers never re-inspect magic string fields.

use super::client::ApiResponse;
use super::responses::{CreatedPageBody, NotionErrorBody};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::CreatedPage;
use reqwest::StatusCode;
use serde_json::Value;

/// Classifies a raw create-page response into a domain result.
///
/// Outcomes, in order of inspection:
/// - body is not JSON: a failing HTTP status becomes a service error with the
///   status as its code; a 2xx with garbage is a `MalformedResponse`.
/// - `object == "error"`: a service error with code and message verbatim.
/// - `object` present and an `id` string: success.
/// - anything else: `MalformedResponse`, so callers can tell "remote said no"
///   from "we couldn't understand the reply".
pub fn parse_create_page_response(result: ApiResponse<String>) -> Result<CreatedPage, AppError> {
    let value: Value = match serde_json::from_str(&result.data) {
        Ok(value) => value,
        Err(e) => {
            if !result.status.is_success() {
                return Err(AppError::NotionService {
                    code: NotionErrorCode::from_http_status(result.status.as_u16()),
                    message: format!("HTTP {} from {}", result.status, result.url),
                    status: result.status,
                });
            }
            log::error!("Failed to parse response from {}: {}", result.url, e);
            return Err(AppError::MalformedResponse(format!(
                "invalid JSON: {} (body: {})",
                e,
                preview(&result.data)
            )));
        }
    };

    classify_body(value, result.status)
}

/// Decides success vs error from an already-parsed body.
fn classify_body(value: Value, http_status: StatusCode) -> Result<CreatedPage, AppError> {
    let object = value
        .get("object")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            AppError::MalformedResponse("missing 'object' field in response".to_string())
        })?;

    if object == "error" {
        let body: NotionErrorBody = serde_json::from_value(value).map_err(|e| {
            AppError::MalformedResponse(format!("unparseable error envelope: {}", e))
        })?;

        let status = body
            .status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .unwrap_or(http_status);

        // The body's code string wins; a missing code falls back to the status.
        let code = body
            .code
            .as_deref()
            .map(NotionErrorCode::from_api_response)
            .unwrap_or_else(|| NotionErrorCode::from_http_status(status.as_u16()));

        if let Some(request_id) = &body.request_id {
            log::debug!("Notion error response, request_id: {}", request_id);
        }

        return Err(AppError::NotionService {
            code,
            message: body.message,
            status,
        });
    }

    let page: CreatedPageBody = serde_json::from_value(value.clone()).map_err(|_| {
        AppError::MalformedResponse(format!(
            "success object '{}' without a page id",
            object
        ))
    })?;

    Ok(CreatedPage {
        id: page.id,
        url: page.url,
        body: value,
    })
}

fn preview(body: &str) -> String {
    if body.len() > ERROR_BODY_PREVIEW_LENGTH {
        // Back off to a char boundary so multibyte bodies can't split a char.
        let mut end = ERROR_BODY_PREVIEW_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
