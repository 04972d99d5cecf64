//! Record category
//!
//! Every record is either income or an expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Money coming in
    #[serde(alias = "Доход")]
    Income,
    /// Money going out
    #[serde(alias = "Расход")]
    Expense,
}

impl Category {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Parse a category name, case-insensitively
    ///
    /// Also accepts the names used by ledgers written in Russian.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "доход" => Ok(Self::Income),
            "expense" | "expenses" | "расход" => Ok(Self::Expense),
            _ => Err(CategoryParseError(s.trim().to_string())),
        }
    }
}

/// Error returned for an unknown category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}'. Use Income or Expense",
            self.0
        )
    }
}

impl std::error::Error for CategoryParseError {}
