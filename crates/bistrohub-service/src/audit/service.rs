//! Change log service — persists diff results as change record batches.

use std::sync::Arc;

use tracing::{debug, error};
use uuid::Uuid;

use bistrohub_database::repositories::change_record::ChangeRecordRepository;
use bistrohub_entity::audit::CreateChangeRecord;

use super::diff::{FieldSnapshot, diff_snapshots};

/// Persists field-level changes for mutating admin operations.
///
/// This is a fire-and-forget boundary: persistence failures are logged for
/// the operator and never surface to the caller, so an audit outage cannot
/// fail a business operation that has already committed.
#[derive(Debug, Clone)]
pub struct ChangeLogService {
    change_repo: Arc<ChangeRecordRepository>,
}

impl ChangeLogService {
    /// Creates a new change log service.
    pub fn new(change_repo: Arc<ChangeRecordRepository>) -> Self {
        Self { change_repo }
    }

    /// Diffs two snapshots of one record and persists the result as a batch.
    ///
    /// When no tracked field changed, nothing is written.
    pub async fn record_changes(
        &self,
        actor_id: Option<Uuid>,
        model_name: &str,
        record_id: Uuid,
        previous: &FieldSnapshot,
        next: &FieldSnapshot,
    ) {
        let deltas = diff_snapshots(previous, next);
        if deltas.is_empty() {
            debug!(model_name, %record_id, "No tracked field changes to record");
            return;
        }

        let records: Vec<CreateChangeRecord> = deltas
            .into_iter()
            .map(|delta| CreateChangeRecord {
                actor_id,
                model_name: model_name.to_string(),
                record_id,
                field_name: delta.field_name,
                previous_value: delta.previous_value,
                new_value: delta.new_value,
            })
            .collect();

        if let Err(e) = self.change_repo.insert_batch(&records).await {
            error!(
                model_name,
                %record_id,
                error = %e,
                "Failed to persist change records"
            );
        }
    }
}
