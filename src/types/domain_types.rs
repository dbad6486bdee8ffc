// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::{DatabaseId, ValidationError};
use std::fmt;

/// API key for Notion API authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();

        // Validate API key format
        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if !key.starts_with("secret_") && !key.starts_with("ntn_") {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key must start with 'secret_' or 'ntn_'".to_string(),
            });
        }

        if key.len() < 20 {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key is too short".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create an API key without validation (only for testing)
    #[cfg(test)]
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display; cut on a char boundary since validation
        // does not constrain keys to ASCII.
        let mut end = 10.min(self.0.len());
        while !self.0.is_char_boundary(end) {
            end -= 1;
        }
        write!(f, "{}...", &self.0[..end])
    }
}

/// The two secrets every create call depends on: the bearer token and the
/// target database.
///
/// Constructed once and injected into the client — there is no process-wide
/// secret state, and neither value is ever logged in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: ApiKey,
    database_id: DatabaseId,
}

impl Credentials {
    pub fn new(api_key: ApiKey, database_id: DatabaseId) -> Self {
        Self {
            api_key,
            database_id,
        }
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn database_id(&self) -> &DatabaseId {
        &self.database_id
    }
}
