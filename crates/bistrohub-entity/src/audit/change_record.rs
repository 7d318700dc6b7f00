//! Field-level change record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One redacted, truncated before/after pair for a single field of a single
/// mutated record. Insert-only; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChangeRecord {
    /// Unique change record identifier.
    pub id: Uuid,
    /// The user who performed the mutation (None for system actions).
    pub actor_id: Option<Uuid>,
    /// The mutated model's name (e.g. `"menu_item"`).
    pub model_name: String,
    /// The mutated record's id.
    pub record_id: Uuid,
    /// The changed field's name.
    pub field_name: String,
    /// Stringified value before the mutation.
    pub previous_value: Option<String>,
    /// Stringified value after the mutation.
    pub new_value: Option<String>,
    /// When the change was recorded.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new change record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChangeRecord {
    /// The acting user.
    pub actor_id: Option<Uuid>,
    /// The mutated model's name.
    pub model_name: String,
    /// The mutated record's id.
    pub record_id: Uuid,
    /// The changed field's name.
    pub field_name: String,
    /// Stringified value before the mutation.
    pub previous_value: Option<String>,
    /// Stringified value after the mutation.
    pub new_value: Option<String>,
}
