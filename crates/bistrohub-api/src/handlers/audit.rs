//! Audit trail handlers — change record and request log search.

use axum::Json;
use axum::extract::{Query, State};

use bistrohub_core::types::pagination::PageResponse;
use bistrohub_entity::audit::{ChangeRecord, RequestLogEntry};

use crate::dto::request::{ChangeLogQuery, RequestLogQuery, page_request};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/audit/changes
pub async fn search_changes(
    State(state): State<AppState>,
    Query(query): Query<ChangeLogQuery>,
) -> Result<Json<ApiResponse<PageResponse<ChangeRecord>>>, ApiError> {
    let page = page_request(query.page, query.page_size);
    let records = state
        .change_record_repo
        .search(
            query.actor_id,
            query.model_name.as_deref(),
            query.record_id,
            &page,
        )
        .await?;
    Ok(Json(ApiResponse::ok(records)))
}

/// GET /api/audit/requests
pub async fn search_requests(
    State(state): State<AppState>,
    Query(query): Query<RequestLogQuery>,
) -> Result<Json<ApiResponse<PageResponse<RequestLogEntry>>>, ApiError> {
    let page = page_request(query.page, query.page_size);
    let entries = state
        .request_log_repo
        .search(
            query.actor_id,
            query.category.as_deref(),
            query.action.as_deref(),
            &page,
        )
        .await?;
    Ok(Json(ApiResponse::ok(entries)))
}
