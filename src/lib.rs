//! finance-ledger - personal income and expense ledger
//!
//! This library keeps an ordered list of income and expense records in a
//! JSON document, supports adding, editing and searching them, and reports
//! the running balance. The `ledger` binary drives it through an interactive
//! text menu or one-shot subcommands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, amounts, categories, search criteria and balances
//! - `storage`: JSON file storage and the ledger store
//! - `audit`: Audit logging of adds and edits
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu and subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_ledger::config::{LedgerPaths, Settings};
//! use finance_ledger::storage::open_configured;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_configured(&paths, &settings, None)?;
//! println!("{} records", store.len());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
