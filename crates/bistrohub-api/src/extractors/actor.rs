//! `Actor` extractor — reads the request context installed by the actor
//! middleware.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use bistrohub_service::context::RequestContext;

/// The current request's actor context, available in handlers.
///
/// Always extracts successfully; an anonymous request yields a context with
/// no actor id.
#[derive(Debug, Clone, Copy)]
pub struct Actor(pub RequestContext);

impl std::ops::Deref for Actor {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Actor(
            parts
                .extensions
                .get::<RequestContext>()
                .copied()
                .unwrap_or_default(),
        ))
    }
}
