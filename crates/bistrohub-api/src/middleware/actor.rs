//! Actor context middleware — installs the externally verified identity.
//!
//! Authentication happens at the fronting gateway, which forwards the
//! verified caller id in the `x-actor-id` header. A missing or malformed
//! header simply means the request is anonymous.

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use bistrohub_service::context::RequestContext;

/// Header carrying the gateway-verified actor id.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";

/// Parses the actor header and installs a [`RequestContext`] extension.
pub async fn actor_context(mut request: Request<Body>, next: Next) -> Response {
    let context = request
        .headers()
        .get(ACTOR_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .map(RequestContext::authenticated)
        .unwrap_or_default();

    request.extensions_mut().insert(context);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::routing::get;
    use http::StatusCode;
    use tower::ServiceExt;

    use crate::extractors::Actor;

    fn test_router() -> Router {
        async fn whoami(actor: Actor) -> String {
            actor
                .actor_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "anonymous".to_string())
        }

        Router::new()
            .route("/whoami", get(whoami))
            .layer(axum::middleware::from_fn(actor_context))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_header_installs_actor() {
        let id = Uuid::new_v4();
        let response = test_router()
            .oneshot(
                http::Request::builder()
                    .uri("/whoami")
                    .header(ACTOR_ID_HEADER, id.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, id.to_string());
    }

    #[tokio::test]
    async fn test_missing_header_is_anonymous_not_an_error() {
        let response = test_router()
            .oneshot(
                http::Request::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "anonymous");
    }

    #[tokio::test]
    async fn test_malformed_header_is_anonymous() {
        let response = test_router()
            .oneshot(
                http::Request::builder()
                    .uri("/whoami")
                    .header(ACTOR_ID_HEADER, "not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "anonymous");
    }
}
