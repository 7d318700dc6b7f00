//! Order handlers — storefront checkout plus back-office CRUD.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use bistrohub_core::types::pagination::PageResponse;
use bistrohub_entity::order::{OrderWithItems, UpdateOrder};
use bistrohub_service::order::CheckoutRequest;

use crate::dto::request::{OrderListQuery, page_request};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OrderWithItems>>), ApiError> {
    let order = state.order_service.checkout(req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(order))))
}

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<ApiResponse<PageResponse<OrderWithItems>>>, ApiError> {
    let page = page_request(query.page, query.page_size);
    let orders = state.order_service.list(query.status, &page).await?;
    Ok(Json(ApiResponse::ok(orders)))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderWithItems>>, ApiError> {
    let order = state.order_service.get(id).await?;
    Ok(Json(ApiResponse::ok(order)))
}

/// PUT /api/orders/{id}
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateOrder>,
) -> Result<Json<ApiResponse<OrderWithItems>>, ApiError> {
    let order = state.order_service.update(id, data).await?;
    Ok(Json(ApiResponse::ok(order)))
}

/// DELETE /api/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.order_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
