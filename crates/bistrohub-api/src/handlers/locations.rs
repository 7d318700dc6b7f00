//! Franchise location handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use bistrohub_core::error::AppError;
use bistrohub_core::types::pagination::PageResponse;
use bistrohub_entity::location::{Location, UpdateLocation};

use crate::dto::request::{CreateLocationRequest, ListQuery, page_request};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::Actor;
use crate::state::AppState;

/// GET /api/locations
pub async fn list_locations(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Location>>>, ApiError> {
    let page = page_request(query.page, query.page_size);
    let locations = state.location_service.list(&page).await?;
    Ok(Json(ApiResponse::ok(locations)))
}

/// GET /api/locations/{id}
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Location>>, ApiError> {
    let location = state.location_service.get(id).await?;
    Ok(Json(ApiResponse::ok(location)))
}

/// POST /api/locations
pub async fn create_location(
    State(state): State<AppState>,
    Json(req): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Location>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid location: {e}")))?;
    let location = state.location_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(location))))
}

/// PUT /api/locations/{id}
pub async fn update_location(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateLocation>,
) -> Result<Json<ApiResponse<Location>>, ApiError> {
    let location = state.location_service.update(&actor, id, data).await?;
    Ok(Json(ApiResponse::ok(location)))
}

/// DELETE /api/locations/{id}
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.location_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
