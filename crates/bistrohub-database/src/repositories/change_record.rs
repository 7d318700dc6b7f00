//! Change record repository implementation.

use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use bistrohub_core::error::{AppError, ErrorKind};
use bistrohub_core::result::AppResult;
use bistrohub_core::types::pagination::{PageRequest, PageResponse};
use bistrohub_entity::audit::{ChangeRecord, CreateChangeRecord};

/// Repository for field-level change records.
#[derive(Debug, Clone)]
pub struct ChangeRecordRepository {
    pool: PgPool,
}

impl ChangeRecordRepository {
    /// Create a new change record repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert all change records of one mutation as a single batch.
    pub async fn insert_batch(&self, records: &[CreateChangeRecord]) -> AppResult<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO change_records \
             (actor_id, model_name, record_id, field_name, previous_value, new_value) ",
        );
        builder.push_values(records, |mut row, record| {
            row.push_bind(record.actor_id)
                .push_bind(&record.model_name)
                .push_bind(record.record_id)
                .push_bind(&record.field_name)
                .push_bind(&record.previous_value)
                .push_bind(&record.new_value);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert change records", e)
            })?;

        Ok(())
    }

    /// Search change records with optional filters, newest first.
    pub async fn search(
        &self,
        actor_id: Option<Uuid>,
        model_name: Option<&str>,
        record_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ChangeRecord>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if actor_id.is_some() {
            conditions.push(format!("actor_id = ${param_idx}"));
            param_idx += 1;
        }
        if model_name.is_some() {
            conditions.push(format!("model_name = ${param_idx}"));
            param_idx += 1;
        }
        if record_id.is_some() {
            conditions.push(format!("record_id = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM change_records {where_clause}");
        let select_sql = format!(
            "SELECT * FROM change_records {where_clause} \
             ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, ChangeRecord>(&select_sql);

        if let Some(aid) = actor_id {
            count_query = count_query.bind(aid);
            select_query = select_query.bind(aid);
        }
        if let Some(m) = model_name {
            count_query = count_query.bind(m.to_string());
            select_query = select_query.bind(m.to_string());
        }
        if let Some(rid) = record_id {
            count_query = count_query.bind(rid);
            select_query = select_query.bind(rid);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count change records", e)
        })?;

        let records = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search change records", e)
            })?;

        Ok(PageResponse::new(
            records,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
