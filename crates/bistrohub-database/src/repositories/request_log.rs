//! Request log repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use bistrohub_core::error::{AppError, ErrorKind};
use bistrohub_core::result::AppResult;
use bistrohub_core::types::pagination::{PageRequest, PageResponse};
use bistrohub_entity::audit::{CreateRequestLogEntry, RequestLogEntry};

/// Repository for per-request audit log entries.
#[derive(Debug, Clone)]
pub struct RequestLogRepository {
    pool: PgPool,
}

impl RequestLogRepository {
    /// Create a new request log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a request log entry.
    pub async fn insert(&self, data: &CreateRequestLogEntry) -> AppResult<RequestLogEntry> {
        sqlx::query_as::<_, RequestLogEntry>(
            "INSERT INTO request_logs \
             (actor_id, category, action, response_code, response_snippet, error_message, \
              duration_ms, metadata) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.actor_id)
        .bind(&data.category)
        .bind(&data.action)
        .bind(data.response_code)
        .bind(&data.response_snippet)
        .bind(&data.error_message)
        .bind(data.duration_ms)
        .bind(&data.metadata)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert request log entry", e)
        })
    }

    /// Search request log entries with optional filters, newest first.
    pub async fn search(
        &self,
        actor_id: Option<Uuid>,
        category: Option<&str>,
        action: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<RequestLogEntry>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if actor_id.is_some() {
            conditions.push(format!("actor_id = ${param_idx}"));
            param_idx += 1;
        }
        if category.is_some() {
            conditions.push(format!("category = ${param_idx}"));
            param_idx += 1;
        }
        if action.is_some() {
            conditions.push(format!("action = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM request_logs {where_clause}");
        let select_sql = format!(
            "SELECT * FROM request_logs {where_clause} \
             ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, RequestLogEntry>(&select_sql);

        if let Some(aid) = actor_id {
            count_query = count_query.bind(aid);
            select_query = select_query.bind(aid);
        }
        if let Some(c) = category {
            count_query = count_query.bind(c.to_string());
            select_query = select_query.bind(c.to_string());
        }
        if let Some(a) = action {
            count_query = count_query.bind(a.to_string());
            select_query = select_query.bind(a.to_string());
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count request log entries", e)
        })?;

        let entries = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search request log entries", e)
            })?;

        Ok(PageResponse::new(
            entries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
