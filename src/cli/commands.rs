//! Ledger CLI commands
//!
//! One-shot subcommands over the same store the menu uses.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::LedgerPaths;
use crate::display::{
    format_balance_line, format_record_details, format_record_table, format_search_results,
    format_summary, DisplayFormat,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Amount, BalanceKind, Category, SearchCriteria};
use crate::storage::LedgerStore;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Add an income or expense record
    Add {
        /// Category: income or expense
        category: String,
        /// Amount (non-negative)
        amount: String,
        /// What the money was for
        description: String,
        /// Record date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit a record by its number in `ledger list`
    Edit {
        /// Record number (1-based)
        number: usize,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New amount (0 keeps the current one)
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Modification date to stamp (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Find records matching every given criterion
    Search {
        /// Category: income or expense
        #[arg(short, long)]
        category: Option<String>,
        /// Exact date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Exact amount
        #[arg(short, long)]
        amount: Option<String>,
    },
    /// List all records
    List,
    /// Show balance, income and expenses
    Balance {
        /// Show total income only
        #[arg(long, conflicts_with = "expenses")]
        income: bool,
        /// Show total expenses only
        #[arg(long)]
        expenses: bool,
    },
    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn date_or_today(input: Option<&str>) -> LedgerResult<NaiveDate> {
    match input {
        Some(text) => parse_date(text),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_amount(input: &str) -> LedgerResult<Amount> {
    Amount::parse(input).map_err(|_| LedgerError::invalid_amount(input.trim()))
}

fn parse_category(input: &str) -> LedgerResult<Category> {
    input
        .parse::<Category>()
        .map_err(|e| LedgerError::Validation(e.to_string()))
}

/// Handle a ledger command
pub fn handle_ledger_command(
    store: &mut LedgerStore,
    format: &DisplayFormat,
    paths: &LedgerPaths,
    cmd: LedgerCommands,
) -> LedgerResult<()> {
    match cmd {
        LedgerCommands::Add {
            category,
            amount,
            description,
            date,
        } => {
            let category = parse_category(&category)?;
            let amount = parse_amount(&amount)?;
            let date = date_or_today(date.as_deref())?;

            let record = store.add(date, category, amount, description)?;
            let details = format_record_details(record, format);
            println!("Added record #{}:", store.len());
            print!("{}", details);
        }

        LedgerCommands::Edit {
            number,
            category,
            amount,
            description,
            date,
        } => {
            // Number 0 maps past the end so the store rejects it
            let index = number.checked_sub(1).unwrap_or(store.len());
            let category = category.as_deref().map(parse_category).transpose()?;
            let amount = match amount {
                Some(text) => parse_amount(&text)?,
                None => Amount::zero(),
            };
            let modified = date_or_today(date.as_deref())?;

            let record = store.edit(
                index,
                modified,
                category,
                amount,
                description.as_deref().unwrap_or(""),
            )?;
            println!("Updated record #{}:", number);
            print!("{}", format_record_details(record, format));
        }

        LedgerCommands::Search {
            category,
            date,
            amount,
        } => {
            let criteria = SearchCriteria::parse(
                category.as_deref().unwrap_or(""),
                date.as_deref().unwrap_or(""),
                amount.as_deref().unwrap_or(""),
            )?;
            let results = store.search(&criteria);
            print!("{}", format_search_results(&results, format));
        }

        LedgerCommands::List => {
            println!("{}", format_record_table(store.records(), format));
            if !store.is_empty() {
                println!("\nTotal: {} records", store.len());
            }
        }

        LedgerCommands::Balance { income, expenses } => {
            let kind = if income {
                Some(BalanceKind::Income)
            } else if expenses {
                Some(BalanceKind::Expenses)
            } else {
                None
            };

            match kind {
                Some(kind) => println!("{}", format_balance_line(kind, store.balance(kind), format)),
                None => print!("{}", format_summary(&store.summary(), format)),
            }
        }

        LedgerCommands::History { limit } => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = logger.read_recent(limit)?;

            if entries.is_empty() {
                println!("No history recorded.");
                return Ok(());
            }

            for entry in &entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}
