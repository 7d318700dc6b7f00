//! Route definitions for the BistroHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Request flow: CORS → trace → actor context → owner assignment →
/// request audit recorder → route handler.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(order_routes())
        .merge(menu_routes())
        .merge(location_routes())
        .merge(audit_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::request_audit::record_request,
        ))
        .layer(axum_middleware::from_fn(
            middleware::owner_assignment::assign_owner,
        ))
        .layer(axum_middleware::from_fn(middleware::actor::actor_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Storefront checkout and back-office order management
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(handlers::orders::create_order))
        .route("/orders", get(handlers::orders::list_orders))
        .route("/orders/{id}", get(handlers::orders::get_order))
        .route("/orders/{id}", put(handlers::orders::update_order))
        .route("/orders/{id}", delete(handlers::orders::delete_order))
}

/// Menu catalog management
fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(handlers::menu::list_menu_items))
        .route("/menu", post(handlers::menu::create_menu_item))
        .route("/menu/{id}", get(handlers::menu::get_menu_item))
        .route("/menu/{id}", put(handlers::menu::update_menu_item))
        .route("/menu/{id}", delete(handlers::menu::delete_menu_item))
}

/// Franchise location management
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(handlers::locations::list_locations))
        .route("/locations", post(handlers::locations::create_location))
        .route("/locations/{id}", get(handlers::locations::get_location))
        .route("/locations/{id}", put(handlers::locations::update_location))
        .route(
            "/locations/{id}",
            delete(handlers::locations::delete_location),
        )
}

/// Audit trail queries
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route("/audit/changes", get(handlers::audit::search_changes))
        .route("/audit/requests", get(handlers::audit::search_requests))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
