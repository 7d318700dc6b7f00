//! Menu catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use bistrohub_core::error::AppError;
use bistrohub_core::types::pagination::PageResponse;
use bistrohub_entity::menu::{MenuItem, UpdateMenuItem};

use crate::dto::request::{CreateMenuItemRequest, MenuListQuery, page_request};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::Actor;
use crate::state::AppState;

/// GET /api/menu
pub async fn list_menu_items(
    State(state): State<AppState>,
    Query(query): Query<MenuListQuery>,
) -> Result<Json<ApiResponse<PageResponse<MenuItem>>>, ApiError> {
    let page = page_request(query.page, query.page_size);
    let items = state
        .menu_service
        .list(query.category.as_deref(), &page)
        .await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/menu/{id}
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let item = state.menu_service.get(id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// POST /api/menu
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(req): Json<CreateMenuItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MenuItem>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid menu item: {e}")))?;
    let item = state.menu_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// PUT /api/menu/{id}
pub async fn update_menu_item(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateMenuItem>,
) -> Result<Json<ApiResponse<MenuItem>>, ApiError> {
    let item = state.menu_service.update(&actor, id, data).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/menu/{id}
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.menu_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
