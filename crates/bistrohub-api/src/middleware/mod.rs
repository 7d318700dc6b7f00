//! Cross-cutting HTTP middleware.

pub mod actor;
pub mod cors;
pub mod owner_assignment;
pub mod request_audit;
