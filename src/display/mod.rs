//! Display formatting for terminal output
//!
//! Provides utilities for formatting records and balances for terminal
//! display.

pub mod record;
pub mod report;

pub use record::{format_record_details, format_record_table, format_search_results};
pub use report::{format_balance_line, format_summary};

use chrono::NaiveDate;

use crate::config::Settings;

/// Currency symbol and date format used when printing
#[derive(Debug, Clone)]
pub struct DisplayFormat {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayFormat {
    /// Format a money value; negative values put the sign before the symbol
    pub fn amount(&self, value: f64) -> String {
        if value < 0.0 {
            format!("-{}{:.2}", self.currency_symbol, -value)
        } else {
            format!("{}{:.2}", self.currency_symbol, value)
        }
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for DisplayFormat {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}
