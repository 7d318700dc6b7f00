//! Request audit recorder.
//!
//! Wraps every request: times it, captures a copy of the outgoing body
//! without altering status, headers, or bytes, and persists one request log
//! entry after the response is on its way. Persistence runs in a detached
//! task; its failure is an operator concern, never a client one.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use serde_json::{Value, json};
use tracing::error;

use bistrohub_entity::audit::CreateRequestLogEntry;
use bistrohub_service::context::RequestContext;

use crate::state::AppState;

/// Maximum stored length of a response snippet, in characters.
const SNIPPET_TRUNCATE_LENGTH: usize = 500;

/// Records one request log entry per inbound request.
pub async fn record_request(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let actor_id = request
        .extensions()
        .get::<RequestContext>()
        .and_then(|ctx| ctx.actor_id);

    let response = next.run(request).await;
    let duration_ms = start.elapsed().as_millis() as i64;

    let (parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "Failed to capture response body for audit log");
            return Response::from_parts(parts, Body::empty());
        }
    };

    let entry = CreateRequestLogEntry {
        actor_id,
        category: category_from_path(&path),
        action: action_from_method(&method).to_string(),
        response_code: parts.status.as_u16() as i32,
        response_snippet: snippet_from_bytes(&bytes),
        error_message: error_message(parts.status, &bytes),
        duration_ms,
        metadata: Some(json!({
            "method": method.as_str(),
            "path": path,
        })),
    };

    let repo = Arc::clone(&state.request_log_repo);
    tokio::spawn(async move {
        if let Err(e) = repo.insert(&entry).await {
            error!(error = %e, "Failed to persist request log entry");
        }
    });

    Response::from_parts(parts, Body::from(bytes))
}

/// Derives the audit action from the HTTP verb.
fn action_from_method(method: &Method) -> &'static str {
    match *method {
        Method::POST => "create",
        Method::PUT | Method::PATCH => "update",
        Method::DELETE => "delete",
        _ => "get",
    }
}

/// Derives the route group from the request path.
///
/// `/api/orders/123` → `orders`; paths outside `/api` use their first
/// segment; `/` falls back to `root`.
fn category_from_path(path: &str) -> String {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    match segments.next() {
        Some("api") => segments.next().unwrap_or("api").to_string(),
        Some(first) => first.to_string(),
        None => "root".to_string(),
    }
}

/// Extracts a truncated, lossy-UTF-8 snippet of the response body.
fn snippet_from_bytes(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    Some(truncate_snippet(&String::from_utf8_lossy(bytes)))
}

/// Pulls the `message` field out of standard error bodies.
fn error_message(status: StatusCode, bytes: &[u8]) -> Option<String> {
    if !status.is_client_error() && !status.is_server_error() {
        return None;
    }
    serde_json::from_slice::<Value>(bytes)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
}

/// Truncates to [`SNIPPET_TRUNCATE_LENGTH`] characters, appending `…` when cut.
fn truncate_snippet(s: &str) -> String {
    if s.chars().count() <= SNIPPET_TRUNCATE_LENGTH {
        return s.to_string();
    }
    let mut out: String = s.chars().take(SNIPPET_TRUNCATE_LENGTH).collect();
    out.push('…');
    out
}
