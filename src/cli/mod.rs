//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot subcommands,
//! bridging clap argument parsing and terminal input with the ledger store.

pub mod commands;
pub mod menu;

pub use commands::{handle_ledger_command, LedgerCommands};
pub use menu::{category_from_sign, Menu};
