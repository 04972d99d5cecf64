//! Amount type for record values
//!
//! Amounts are non-negative, finite `f64` values. The direction of money
//! (income or expense) lives in the record's category, never in the sign.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount
///
/// Equality is exact floating-point equality; searching by amount relies on it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting negative and non-finite values
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative(value));
        }
        // Normalize -0.0 so it prints and serializes as 0
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Zero means "keep the existing amount" when editing
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts plain decimal numbers with either `.` or `,` as the decimal
    /// separator and an optional leading `$`.
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        Self::new(Self::parse_number(s)?)
    }

    /// Parse a number with the same rules as [`Amount::parse`], without the
    /// sign and finiteness checks
    pub fn parse_number(s: &str) -> Result<f64, AmountError> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let normalized = trimmed.replace(',', ".");

        normalized
            .parse()
            .map_err(|_| AmountError::InvalidFormat(s.trim().to_string()))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Error type for amount parsing and validation
#[derive(Debug, Clone, PartialEq)]
pub enum AmountError {
    InvalidFormat(String),
    Negative(f64),
    NotFinite,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            AmountError::Negative(v) => write!(f, "Amount cannot be negative: {}", v),
            AmountError::NotFinite => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for AmountError {}
