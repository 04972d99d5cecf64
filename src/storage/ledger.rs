//! Ledger store
//!
//! Owns the ordered list of records and mirrors it to a single JSON document.
//! Every mutation rewrites the whole document before returning.
//!
//! There is no locking: two processes writing the same document race, and
//! the last writer wins.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, BalanceKind, BalanceSummary, Category, Record, SearchCriteria};

use super::file_io::{read_json_or_init, write_json_atomic};

/// In-memory ledger backed by a JSON array on disk
#[derive(Debug)]
pub struct LedgerStore {
    path: PathBuf,
    records: Vec<Record>,
    audit: Option<AuditLogger>,
}

impl LedgerStore {
    /// Open the ledger at `path`
    ///
    /// A missing document is created holding an empty ledger. A document that
    /// exists but is not a valid record array fails with
    /// [`LedgerError::Corrupt`].
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let path = path.into();
        let records: Vec<Record> = read_json_or_init(&path)?;
        debug!(path = %path.display(), count = records.len(), "loaded ledger");

        Ok(Self {
            path,
            records,
            audit: None,
        })
    }

    /// Record every add and edit in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Rewrite the backing document from memory
    pub fn save(&self) -> LedgerResult<()> {
        write_json_atomic(&self.path, &self.records)?;
        debug!(path = %self.path.display(), count = self.records.len(), "saved ledger");
        Ok(())
    }

    /// Append a record and persist
    ///
    /// Success means the document was rewritten. Audit log failures after
    /// that point are logged, not returned.
    pub fn add(
        &mut self,
        date: NaiveDate,
        category: Category,
        amount: Amount,
        description: impl Into<String>,
    ) -> LedgerResult<&Record> {
        let record = Record::new(date, category, amount, description);
        let index = self.records.len();
        self.records.push(record);

        if let Err(e) = self.save() {
            // Keep memory in step with the document
            self.records.pop();
            return Err(e);
        }

        let record = &self.records[index];
        info!(index, id = %record.id, category = %record.category, "added record");

        // Committed once saved; audit failures are only logged
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&AuditEntry::create(index, record)) {
                warn!(index, error = %e, "failed to write audit entry");
            }
        }

        Ok(record)
    }

    /// Edit the record at `index` (0-based) and persist
    ///
    /// `date` always becomes the record's `modified_date`. The category is
    /// replaced only when given, the amount only when non-zero and the
    /// description only when non-empty.
    pub fn edit(
        &mut self,
        index: usize,
        date: NaiveDate,
        category: Option<Category>,
        amount: Amount,
        description: &str,
    ) -> LedgerResult<&Record> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;

        let before = record.clone();
        record.apply_edit(date, category, amount, description);

        if let Err(e) = self.save() {
            self.records[index] = before;
            return Err(e);
        }

        let record = &self.records[index];
        info!(index, id = %record.id, "edited record");

        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&AuditEntry::update(index, &before, record)) {
                warn!(index, error = %e, "failed to write audit entry");
            }
        }

        Ok(record)
    }

    /// Records matching every set criterion, in ledger order
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect()
    }

    /// Income, expenses and balance over the whole ledger
    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary::from_records(&self.records)
    }

    /// One aggregate of the ledger
    pub fn balance(&self, kind: BalanceKind) -> f64 {
        self.summary().get(kind)
    }

    /// One aggregate chosen by selector: 0 = balance, 1 = income, 2 = expenses
    pub fn balance_by_selector(&self, selector: usize) -> LedgerResult<f64> {
        Ok(self.balance(BalanceKind::from_selector(selector)?))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
