//! # bistrohub-database
//!
//! PostgreSQL connection management, migration runner, and repository
//! implementations for BistroHub. Repositories own plain SQL; all errors
//! are mapped into [`bistrohub_core::AppError`].

pub mod connection;
pub mod migration;
pub mod repositories;
