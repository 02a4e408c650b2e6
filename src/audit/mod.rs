//! Audit logging for monthbook
//!
//! Every add, edit and delete of an entry is recorded with before/after
//! values in an append-only JSONL log.
//!
//! - `AuditEntry`: timestamp, operation, entry kind and id, month, and the
//!   entry's JSON before and after.
//! - `AuditLogger`: appends entries to the log file and reads them back,
//!   optionally for one month.
//! - `describe_edit`: one-line summary of the fields an edit changed.

mod diff;
mod entry;
mod logger;

pub use diff::describe_edit;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
