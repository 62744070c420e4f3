//! Audit logging for the expense tracker
//!
//! Every add and delete is appended to `audit.log` as one JSON line, so the
//! history of the expense file can be reconstructed even though the file
//! itself is rewritten on every change.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
