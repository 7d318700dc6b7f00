//! Health check handlers.

use axum::Json;
use axum::extract::State;

use bistrohub_database::connection;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
