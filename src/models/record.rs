//! Ledger record model
//!
//! One income or expense entry. Records are created by an add, changed in
//! place by an edit and never removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;
use super::ids::RecordId;

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier; documents without one get a fresh id on load
    #[serde(default)]
    pub id: RecordId,

    /// Date the entry refers to
    #[serde(alias = "Дата")]
    pub date: NaiveDate,

    #[serde(alias = "Категория")]
    pub category: Category,

    #[serde(alias = "Сумма")]
    pub amount: Amount,

    #[serde(alias = "Описание")]
    pub description: String,

    /// Date of the last edit, absent until the record is edited
    #[serde(
        default,
        alias = "Изменен",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_date: Option<NaiveDate>,
}

impl Record {
    /// Create a new record
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            date,
            category,
            amount,
            description: description.into(),
            modified_date: None,
        }
    }

    /// Apply an edit
    ///
    /// `modified` is always stamped. The other fields are replaced only when a
    /// value is given: `Some` category, non-zero amount, non-empty description.
    /// The record's own `date` is never changed by an edit.
    pub fn apply_edit(
        &mut self,
        modified: NaiveDate,
        category: Option<Category>,
        amount: Amount,
        description: &str,
    ) {
        if let Some(category) = category {
            self.category = category;
        }
        if !amount.is_zero() {
            self.amount = amount;
        }
        if !description.is_empty() {
            self.description = description.to_string();
        }
        self.modified_date = Some(modified);
    }

    pub fn is_income(&self) -> bool {
        self.category.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.category.is_expense()
    }

    pub fn was_modified(&self) -> bool {
        self.modified_date.is_some()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}
