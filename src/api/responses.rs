// src/api/responses.rs
//! Raw wire types for the create-page endpoint.
//!
//! These mirror exactly what the API puts on the wire; classification into
//! domain results happens in `parser`.

use serde::Deserialize;

/// The API's error envelope: `{"object": "error", "status": ..., "code": ...,
/// "message": ...}`.
///
/// Every field except `object` has been observed missing in the wild, so all
/// are optional and the parser fills the gaps from the HTTP layer.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorBody {
    pub status: Option<u16>,
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    pub request_id: Option<String>,
}

/// The fields of a successful create response the typed layer cares about.
/// The rest of the body is carried through as raw JSON on `CreatedPage`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPageBody {
    pub id: String,
    pub url: Option<String>,
}
