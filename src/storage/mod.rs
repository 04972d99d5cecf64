//! Storage layer for the ledger
//!
//! JSON file storage with atomic whole-file writes and the [`LedgerStore`]
//! that owns the in-memory records.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json_or_init, write_json_atomic};
pub use ledger::LedgerStore;

use crate::audit::AuditLogger;
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerError;

/// Open the ledger the configuration points at
///
/// `explicit` is a path given on the command line; it takes precedence over
/// the settings. The audit log is attached when enabled in the settings.
pub fn open_configured(
    paths: &LedgerPaths,
    settings: &Settings,
    explicit: Option<std::path::PathBuf>,
) -> Result<LedgerStore, LedgerError> {
    paths.ensure_directories()?;

    let store = LedgerStore::open(settings.ledger_path(paths, explicit))?;

    Ok(if settings.audit_enabled {
        store.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        store
    })
}
