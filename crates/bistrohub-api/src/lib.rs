//! # bistrohub-api
//!
//! HTTP API layer for BistroHub — axum router, handlers, DTOs, extractors,
//! and the cross-cutting middleware (actor context, owner assignment, and
//! the per-request audit recorder).

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
