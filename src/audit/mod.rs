//! Audit logging for ledger changes
//!
//! Every added or edited record is recorded in an append-only JSONL file,
//! one [`AuditEntry`] per line. Updates carry before/after snapshots and a
//! field-level diff produced by [`generate_diff`].
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(index, &record))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
