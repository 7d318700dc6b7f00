//! Field-level audit trail: snapshot diffing and change record persistence.

pub mod diff;
pub mod service;

pub use diff::{FieldDelta, FieldSnapshot, diff_snapshots};
pub use service::ChangeLogService;
