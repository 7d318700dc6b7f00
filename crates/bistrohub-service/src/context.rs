//! Request context carrying the externally authenticated actor.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current request.
///
/// Identity is verified upstream (the fronting gateway); this context only
/// carries the resulting actor id. `None` means the request is anonymous,
/// which is never an error by itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated actor's id, if any.
    pub actor_id: Option<Uuid>,
}

impl RequestContext {
    /// Creates a context for an authenticated actor.
    pub fn authenticated(actor_id: Uuid) -> Self {
        Self {
            actor_id: Some(actor_id),
        }
    }

    /// Creates an anonymous context.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
