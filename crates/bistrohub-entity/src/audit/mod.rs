//! Audit trail entities — field-level change records and per-request logs.

pub mod change_record;
pub mod request_log;

pub use change_record::{ChangeRecord, CreateChangeRecord};
pub use request_log::{CreateRequestLogEntry, RequestLogEntry};
