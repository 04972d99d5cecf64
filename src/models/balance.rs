//! Balance aggregation types

use serde::Serialize;
use std::fmt;

use super::record::Record;
use crate::error::{LedgerError, LedgerResult};

/// Which aggregate to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceKind {
    /// Income minus expenses
    Balance,
    /// Sum of income records
    Income,
    /// Sum of expense records
    Expenses,
}

impl BalanceKind {
    /// Map a numeric selector: 0 = balance, 1 = income, 2 = expenses
    pub fn from_selector(selector: usize) -> LedgerResult<Self> {
        match selector {
            0 => Ok(Self::Balance),
            1 => Ok(Self::Income),
            2 => Ok(Self::Expenses),
            other => Err(LedgerError::InvalidSelector(other)),
        }
    }

    pub fn selector(&self) -> usize {
        match self {
            Self::Balance => 0,
            Self::Income => 1,
            Self::Expenses => 2,
        }
    }
}

impl fmt::Display for BalanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balance => write!(f, "balance"),
            Self::Income => write!(f, "income"),
            Self::Expenses => write!(f, "expenses"),
        }
    }
}

/// Income, expenses and their difference over a set of records
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BalanceSummary {
    pub income: f64,
    pub expenses: f64,
    /// `income - expenses`; may be negative
    pub balance: f64,
}

impl BalanceSummary {
    /// Aggregate over records
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let (income, expenses) =
            records
                .into_iter()
                .fold((0.0, 0.0), |(income, expenses), record| {
                    if record.is_income() {
                        (income + record.amount.value(), expenses)
                    } else {
                        (income, expenses + record.amount.value())
                    }
                });

        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    pub fn get(&self, kind: BalanceKind) -> f64 {
        match kind {
            BalanceKind::Balance => self.balance,
            BalanceKind::Income => self.income,
            BalanceKind::Expenses => self.expenses,
        }
    }
}
