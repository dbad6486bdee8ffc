// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! how the client talks to the Notion API.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL for all Notion API requests.
pub const API_BASE_URL: &str = "https://api.notion.com/v1";

/// The Notion API protocol revision this client targets.
///
/// Sent as the `Notion-Version` header on every request. The API refuses
/// requests without it, and response shapes are pinned to this revision.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Maximum number of child blocks the API accepts in a single page-creation
/// request. Callers with more content must append further blocks separately.
#[allow(dead_code)]
pub const MAX_CHILDREN_PER_CREATE: usize = 100;

// ---------------------------------------------------------------------------
// Request timing
// ---------------------------------------------------------------------------

/// Default per-request timeout in seconds.
///
/// A create call is one POST; anything slower is treated as a transport
/// failure. Callers can override via `NotionHttpClient::with_timeout`.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
