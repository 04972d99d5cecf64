//! Search criteria for ledger records

use chrono::NaiveDate;

use super::amount::Amount;
use super::category::Category;
use super::record::Record;
use crate::error::{LedgerError, LedgerResult};

/// Conjunction of optional record filters
///
/// An unset criterion matches every record, so the default value matches all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    /// Compared with exact equality against the record's value
    ///
    /// Stored as a plain number so that a negative query is representable;
    /// it simply matches no record.
    pub amount: Option<f64>,
}

impl SearchCriteria {
    /// Create a new empty criteria set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount.value());
        self
    }

    /// Build criteria from raw text input
    ///
    /// A blank string leaves that criterion unset. Non-blank values must parse
    /// as a category name, a `YYYY-MM-DD` date and a number respectively. A
    /// number no record can hold, such as a negative one, is accepted and
    /// matches nothing.
    pub fn parse(category: &str, date: &str, amount: &str) -> LedgerResult<Self> {
        let mut criteria = Self::new();

        let category = category.trim();
        if !category.is_empty() {
            criteria.category = Some(
                category
                    .parse::<Category>()
                    .map_err(|e| LedgerError::Validation(e.to_string()))?,
            );
        }

        let date = date.trim();
        if !date.is_empty() {
            criteria.date = Some(parse_date(date)?);
        }

        let amount = amount.trim();
        if !amount.is_empty() {
            criteria.amount = Some(Amount::parse_number(amount).map_err(|_| {
                LedgerError::Validation(format!("Amount must be a number, got '{}'", amount))
            })?);
        }

        Ok(criteria)
    }

    /// Check whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.date.is_none() && self.amount.is_none()
    }

    /// Check a record against every set criterion
    pub fn matches(&self, record: &Record) -> bool {
        self.category.map_or(true, |c| record.category == c)
            && self.date.map_or(true, |d| record.date == d)
            && self.amount.map_or(true, |a| record.amount.value() == a)
    }
}

/// Parse a `YYYY-MM-DD` date from user input
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            input.trim()
        ))
    })
}
