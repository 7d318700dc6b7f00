//! Per-request audit log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A per-request log entry capturing outcome, latency, and a truncated
/// response snippet, independent of business success. One per inbound
/// request, written after the response has been sent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RequestLogEntry {
    /// Unique log entry identifier.
    pub id: Uuid,
    /// The authenticated caller (None for anonymous requests).
    pub actor_id: Option<Uuid>,
    /// Route group the request targeted (e.g. `"orders"`).
    pub category: String,
    /// Action derived from the HTTP verb (`create`/`update`/`delete`/`get`).
    pub action: String,
    /// HTTP response status code.
    pub response_code: i32,
    /// Truncated snippet of the response body.
    pub response_snippet: Option<String>,
    /// Error message extracted from error responses.
    pub error_message: Option<String>,
    /// Request handling duration in milliseconds.
    pub duration_ms: i64,
    /// Free-form request metadata (method, path).
    pub metadata: Option<serde_json::Value>,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new request log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequestLogEntry {
    /// The authenticated caller.
    pub actor_id: Option<Uuid>,
    /// Route group.
    pub category: String,
    /// Derived action.
    pub action: String,
    /// HTTP response status code.
    pub response_code: i32,
    /// Truncated response snippet.
    pub response_snippet: Option<String>,
    /// Extracted error message.
    pub error_message: Option<String>,
    /// Duration in milliseconds.
    pub duration_ms: i64,
    /// Request metadata.
    pub metadata: Option<serde_json::Value>,
}
