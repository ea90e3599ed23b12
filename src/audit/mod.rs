//! Audit logging for the address book
//!
//! Records every add, update, and delete with before/after snapshots in an
//! append-only log, using a line-delimited JSON format (JSONL).

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
