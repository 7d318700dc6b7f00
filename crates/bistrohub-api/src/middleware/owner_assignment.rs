//! Owner assignment middleware.
//!
//! Creation requests made by an authenticated actor default their
//! `owner_id` field to the actor's id when the payload does not mention it.
//! An explicit `"owner_id": null` is preserved as "no owner". Any other
//! method, anonymous request, or non-JSON body passes through untouched.

use axum::body::Body;
use axum::extract::Request;
use axum::http::{Method, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use bistrohub_core::error::AppError;
use bistrohub_service::context::RequestContext;

use crate::error::ApiError;

/// The payload field defaulted on creation.
const OWNER_FIELD: &str = "owner_id";

/// Defaults the owning-user field on authenticated JSON POST bodies.
pub async fn assign_owner(request: Request<Body>, next: Next) -> Response {
    if request.method() != Method::POST {
        return next.run(request).await;
    }

    let Some(actor_id) = request
        .extensions()
        .get::<RequestContext>()
        .and_then(|ctx| ctx.actor_id)
    else {
        return next.run(request).await;
    };

    let is_json = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return ApiError(AppError::validation(format!(
                "Failed to read request body: {e}"
            )))
            .into_response();
        }
    };

    // Only a JSON object missing the key gets rewritten; everything else —
    // parse failures included — forwards the original bytes.
    let body = match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(mut map)) if !map.contains_key(OWNER_FIELD) => {
            map.insert(OWNER_FIELD.to_string(), Value::String(actor_id.to_string()));
            match serde_json::to_vec(&Value::Object(map)) {
                Ok(rewritten) => {
                    parts.headers.insert(
                        header::CONTENT_LENGTH,
                        header::HeaderValue::from(rewritten.len()),
                    );
                    Body::from(rewritten)
                }
                Err(_) => Body::from(bytes),
            }
        }
        _ => Body::from(bytes),
    };

    next.run(Request::from_parts(parts, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::routing::{post, put};
    use http::StatusCode;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::middleware::actor::{ACTOR_ID_HEADER, actor_context};

    fn test_router() -> Router {
        async fn echo(Json(value): Json<Value>) -> Json<Value> {
            Json(value)
        }

        Router::new()
            .route("/records", post(echo))
            .route("/records", put(echo))
            .layer(axum::middleware::from_fn(assign_owner))
            .layer(axum::middleware::from_fn(actor_context))
    }

    async fn send(
        method: &str,
        actor: Option<Uuid>,
        body: &str,
    ) -> Value {
        let mut builder = http::Request::builder()
            .method(method)
            .uri("/records")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(id) = actor {
            builder = builder.header(ACTOR_ID_HEADER, id.to_string());
        }

        let response = test_router()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_post_with_actor_injects_owner() {
        let actor = Uuid::new_v4();
        let echoed = send("POST", Some(actor), r#"{"name": "Halal Grill"}"#).await;
        assert_eq!(echoed["owner_id"], Value::String(actor.to_string()));
        assert_eq!(echoed["name"], "Halal Grill");
    }

    #[tokio::test]
    async fn test_explicit_null_owner_preserved() {
        let actor = Uuid::new_v4();
        let echoed = send("POST", Some(actor), r#"{"name": "x", "owner_id": null}"#).await;
        assert_eq!(echoed["owner_id"], Value::Null);
    }

    #[tokio::test]
    async fn test_existing_owner_untouched() {
        let actor = Uuid::new_v4();
        let other = Uuid::new_v4();
        let echoed = send(
            "POST",
            Some(actor),
            &format!(r#"{{"name": "x", "owner_id": "{other}"}}"#),
        )
        .await;
        assert_eq!(echoed["owner_id"], Value::String(other.to_string()));
    }

    #[tokio::test]
    async fn test_anonymous_post_untouched() {
        let echoed = send("POST", None, r#"{"name": "x"}"#).await;
        assert!(echoed.get("owner_id").is_none());
    }

    #[tokio::test]
    async fn test_put_untouched() {
        let actor = Uuid::new_v4();
        let echoed = send("PUT", Some(actor), r#"{"name": "x"}"#).await;
        assert!(echoed.get("owner_id").is_none());
    }
}
