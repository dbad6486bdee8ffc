// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system. The
//! client never recovers or retries; every failure is surfaced to the caller
//! as a typed result with the remote diagnostic preserved verbatim.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
///
/// Instead of matching against magic strings like `"validation_error"`,
/// the domain vocabulary is encoded in the type system. Each variant
/// tells you exactly what the Notion API reported and enables
/// pattern-based handling without stringly-typed dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is inaccessible
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation — typically the
    /// property or parent shape does not match the target database schema
    ValidationFailed,
    /// Conflict with current state of the resource
    Conflict,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body carries no code
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body carries no code.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether the remote rejected the credentials.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::RestrictedResource | Self::HttpStatus(401 | 403)
        )
    }

    /// Whether the remote reported a request-shape mismatch — the property
    /// map or parent reference does not fit the target database schema.
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed | Self::InvalidJson | Self::HttpStatus(400)
        )
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether this failure is the remote rejecting our credentials.
    #[allow(dead_code)] // Exercised by lib consumers and tests
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::NotionService { code, .. } if code.is_auth())
    }

    /// Whether this failure is a remote-reported schema mismatch.
    #[allow(dead_code)]
    pub fn is_schema_error(&self) -> bool {
        matches!(self, AppError::NotionService { code, .. } if code.is_schema())
    }

    /// Whether anything at all was heard back from the remote service.
    ///
    /// A `false` here means the remote may still have created the page —
    /// an inherent external-system ambiguity the client cannot resolve.
    #[allow(dead_code)]
    pub fn is_remote_verdict(&self) -> bool {
        matches!(self, AppError::NotionService { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_vocabulary_round_trips_known_codes() {
        for code in [
            "rate_limited",
            "object_not_found",
            "unauthorized",
            "restricted_resource",
            "invalid_json",
            "validation_error",
            "conflict_error",
            "internal_server_error",
            "service_unavailable",
        ] {
            assert_eq!(
                NotionErrorCode::from_api_response(code).to_string(),
                code
            );
        }
    }

    #[test]
    fn unknown_codes_are_carried_verbatim() {
        let code = NotionErrorCode::from_api_response("brand_new_code");
        assert_eq!(code, NotionErrorCode::Unknown("brand_new_code".to_string()));
        assert_eq!(code.to_string(), "brand_new_code");
    }

    #[test]
    fn auth_and_schema_classification() {
        assert!(NotionErrorCode::Unauthorized.is_auth());
        assert!(NotionErrorCode::RestrictedResource.is_auth());
        assert!(NotionErrorCode::from_http_status(401).is_auth());
        assert!(!NotionErrorCode::Unauthorized.is_schema());

        assert!(NotionErrorCode::ValidationFailed.is_schema());
        assert!(NotionErrorCode::from_http_status(400).is_schema());
        assert!(!NotionErrorCode::ValidationFailed.is_auth());
    }

    #[test]
    fn service_error_display_preserves_remote_message() {
        let err = AppError::NotionService {
            code: NotionErrorCode::ValidationFailed,
            message: "Imp Name is not a property that exists".to_string(),
            status: reqwest::StatusCode::BAD_REQUEST,
        };
        assert_eq!(
            err.to_string(),
            "Notion API returned an error (validation_error): Imp Name is not a property that exists"
        );
    }
}
