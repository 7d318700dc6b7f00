//! # bistrohub-entity
//!
//! Domain entity models for BistroHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod audit;
pub mod location;
pub mod menu;
pub mod order;
pub mod serde_helpers;
