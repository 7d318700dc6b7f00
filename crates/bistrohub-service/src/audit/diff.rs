//! Snapshot diffing for the field-level audit trail.
//!
//! Calling services capture a [`FieldSnapshot`] immediately before and after
//! a save and hand both to [`diff_snapshots`]; the diff never reaches into a
//! live persistence handle. Sensitive fields are dropped unconditionally,
//! bookkeeping fields are ignored, and every persisted value is stringified
//! and truncated the same way on both sides of the comparison.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;

use bistrohub_core::error::AppError;
use bistrohub_core::result::AppResult;

/// Maximum stored length of a stringified field value, in characters.
pub const VALUE_TRUNCATE_LENGTH: usize = 500;

/// Bookkeeping fields excluded from diffs entirely.
const IGNORED_FIELDS: &[&str] = &["id", "created_at", "updated_at", "owner_id", "enabled"];

/// Fields that must never appear in a change record, changed or not.
const SENSITIVE_FIELDS: &[&str] = &["password", "password_hash", "token"];

/// An explicit, ordered field → value snapshot of a record.
///
/// Constructed by the mutating service at the point of load/save; the diff
/// engine accepts only this type, not arbitrary JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSnapshot(BTreeMap<String, Value>);

impl FieldSnapshot {
    /// Captures a snapshot of an entity's current field values.
    ///
    /// The entity must serialize to a JSON object; anything else is a
    /// programming error in the caller.
    pub fn capture<T: Serialize>(entity: &T) -> AppResult<Self> {
        match serde_json::to_value(entity)? {
            Value::Object(map) => Ok(Self(map.into_iter().collect())),
            other => Err(AppError::internal(format!(
                "Field snapshots require an object, got {other}"
            ))),
        }
    }

    /// Returns the snapshot's value for a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the snapshot holds no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One changed field: name plus stringified before/after values.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDelta {
    /// The changed field's name.
    pub field_name: String,
    /// Stringified value before the mutation.
    pub previous_value: Option<String>,
    /// Stringified value after the mutation.
    pub new_value: Option<String>,
}

/// Computes the minimal set of field changes between two snapshots.
///
/// Ignored fields are excluded entirely; sensitive fields are skipped even
/// when they differ. A field is reported only when its stringified forms
/// differ.
pub fn diff_snapshots(previous: &FieldSnapshot, next: &FieldSnapshot) -> Vec<FieldDelta> {
    let mut keys: BTreeSet<&String> = previous.0.keys().collect();
    keys.extend(next.0.keys());

    let mut deltas = Vec::new();
    for key in keys {
        if IGNORED_FIELDS.contains(&key.as_str()) || SENSITIVE_FIELDS.contains(&key.as_str()) {
            continue;
        }

        let before = stringify(previous.0.get(key));
        let after = stringify(next.0.get(key));
        if before == after {
            continue;
        }

        deltas.push(FieldDelta {
            field_name: key.clone(),
            previous_value: before,
            new_value: after,
        });
    }

    deltas
}

/// Stringifies a field value for storage.
///
/// Absent and null values store as NULL; plain strings store as-is; anything
/// else stores its JSON encoding. Both forms are truncated to
/// [`VALUE_TRUNCATE_LENGTH`] characters with a trailing ellipsis.
fn stringify(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(truncate(s)),
        Some(other) => {
            let encoded = serde_json::to_string(other).unwrap_or_else(|_| other.to_string());
            Some(truncate(&encoded))
        }
    }
}

/// Truncates to [`VALUE_TRUNCATE_LENGTH`] characters, appending `…` when cut.
fn truncate(s: &str) -> String {
    if s.chars().count() <= VALUE_TRUNCATE_LENGTH {
        return s.to_string();
    }
    let mut out: String = s.chars().take(VALUE_TRUNCATE_LENGTH).collect();
    out.push('…');
    out
}
