//! # bistrohub-service
//!
//! Business logic services for BistroHub. Services orchestrate repositories
//! and own the domain rules: order pricing and checkout, the field-level
//! audit trail, and the audited admin CRUD operations.

pub mod audit;
pub mod context;
pub mod location;
pub mod menu;
pub mod order;
pub mod pricing;
