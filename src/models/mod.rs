//! Core data models for the ledger
//!
//! Records, their categories and amounts, plus the query types used to
//! search and aggregate them.

pub mod amount;
pub mod balance;
pub mod category;
pub mod ids;
pub mod record;
pub mod search;

pub use amount::{Amount, AmountError};
pub use balance::{BalanceKind, BalanceSummary};
pub use category::{Category, CategoryParseError};
pub use ids::RecordId;
pub use record::Record;
pub use search::{parse_date, SearchCriteria};
