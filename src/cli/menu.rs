//! Interactive text menu
//!
//! A thin loop over the [`LedgerStore`]: it reads choices and field values
//! line by line, maps them onto store operations and prints the outcome.
//! Operation failures are reported and the loop carries on; only a failure
//! of the terminal streams themselves ends it with an error. End of input is
//! treated like choosing exit.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::display::{
    format_balance_line, format_record_table, format_search_results, DisplayFormat,
};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, BalanceKind, Category, SearchCriteria};
use crate::storage::LedgerStore;

const MAIN_MENU: &str = "\n\
1. Show balance\n\
2. Add record\n\
3. Edit record\n\
4. Search records\n\
5. Exit";

const BALANCE_MENU: &str = "\n\
1. Show balance\n\
2. Show income\n\
3. Show expenses\n\
4. Back to main menu";

/// Whether the loop should keep going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Map the menu's category shorthand: `+` is income, `-` is an expense
pub fn category_from_sign(input: &str) -> Option<Category> {
    match input.trim() {
        "+" => Some(Category::Income),
        "-" => Some(Category::Expense),
        _ => None,
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Interactive menu over a ledger
pub struct Menu<'a, R, W> {
    store: &'a mut LedgerStore,
    input: R,
    output: W,
    format: DisplayFormat,
    today: fn() -> NaiveDate,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut LedgerStore, input: R, output: W, format: DisplayFormat) -> Self {
        Self {
            store,
            input,
            output,
            format,
            today: local_today,
        }
    }

    /// Replace the source of "today" used for new records and edit stamps
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Run until exit is chosen or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            writeln!(self.output, "{}", MAIN_MENU)?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.balance_menu()?,
                "2" => self.add_record()?,
                "3" => self.edit_record()?,
                "4" => self.search_records()?,
                "5" => {
                    writeln!(self.output, "Goodbye.")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn balance_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "{}", BALANCE_MENU)?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                return Ok(Flow::Quit);
            };

            let selector = match choice.trim().parse::<usize>() {
                Ok(4) => return Ok(Flow::Continue),
                Ok(n) if n >= 1 => BalanceKind::from_selector(n - 1),
                _ => Err(LedgerError::Validation(format!(
                    "'{}' is not a menu option",
                    choice.trim()
                ))),
            };

            match selector {
                Ok(kind) => {
                    let value = self.store.balance(kind);
                    writeln!(self.output, "{}", format_balance_line(kind, value, &self.format))?;
                    if self.pause()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Err(_) => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn add_record(&mut self) -> io::Result<Flow> {
        let Some(sign) = self.prompt("Category (+ income / - expense): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = category_from_sign(&sign) else {
            self.report(&LedgerError::Validation(
                "Category must be '+' or '-'".into(),
            ))?;
            return Ok(Flow::Continue);
        };

        let Some(amount_text) = self.prompt("Amount: ")? else {
            return Ok(Flow::Quit);
        };
        let amount = match Amount::parse(&amount_text) {
            Ok(amount) => amount,
            Err(_) => {
                self.report(&LedgerError::invalid_amount(amount_text.trim()))?;
                return Ok(Flow::Continue);
            }
        };

        let Some(description) = self.prompt("Description: ")? else {
            return Ok(Flow::Quit);
        };

        let today = (self.today)();
        match self.store.add(today, category, amount, description.trim()) {
            Ok(_) => {
                writeln!(self.output, "Record added.")?;
                self.pause()
            }
            Err(e) => {
                self.report(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn edit_record(&mut self) -> io::Result<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "No records to edit.")?;
            return Ok(Flow::Continue);
        }

        writeln!(
            self.output,
            "{}",
            format_record_table(self.store.records(), &self.format)
        )?;

        let Some(number_text) = self.prompt("Record number to edit: ")? else {
            return Ok(Flow::Quit);
        };
        let len = self.store.len();
        let index = match number_text.trim().parse::<usize>() {
            Ok(n) if n >= 1 && n <= len => n - 1,
            _ => {
                self.report(&LedgerError::Validation(format!(
                    "Record number must be between 1 and {}",
                    len
                )))?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.output, "Enter changes. Press Enter to keep a field as it is.")?;

        let Some(sign) = self.prompt("New category (+ income / - expense): ")? else {
            return Ok(Flow::Quit);
        };
        let category = if sign.trim().is_empty() {
            None
        } else {
            match category_from_sign(&sign) {
                Some(category) => Some(category),
                None => {
                    self.report(&LedgerError::Validation(
                        "Category must be '+', '-' or empty".into(),
                    ))?;
                    return Ok(Flow::Continue);
                }
            }
        };

        let Some(amount_text) = self.prompt("New amount (0 to keep): ")? else {
            return Ok(Flow::Quit);
        };
        let amount = if amount_text.trim().is_empty() {
            Amount::zero()
        } else {
            match Amount::parse(&amount_text) {
                Ok(amount) => amount,
                Err(_) => {
                    self.report(&LedgerError::invalid_amount(amount_text.trim()))?;
                    return Ok(Flow::Continue);
                }
            }
        };

        let Some(description) = self.prompt("New description: ")? else {
            return Ok(Flow::Quit);
        };

        let today = (self.today)();
        match self
            .store
            .edit(index, today, category, amount, description.trim())
        {
            Ok(_) => writeln!(self.output, "Record updated.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_records(&mut self) -> io::Result<Flow> {
        writeln!(
            self.output,
            "Enter search criteria. Press Enter to skip a criterion."
        )?;

        let Some(category) = self.prompt("Category (Income/Expense): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(date) = self.prompt("Date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(Flow::Quit);
        };

        let criteria = match SearchCriteria::parse(&category, &date, &amount) {
            Ok(criteria) => criteria,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Continue);
            }
        };

        let results = self.store.search(&criteria);
        write!(self.output, "{}", format_search_results(&results, &self.format))?;

        if results.is_empty() {
            Ok(Flow::Continue)
        } else {
            self.pause()
        }
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn pause(&mut self) -> io::Result<Flow> {
        Ok(match self.prompt("Press Enter to continue...")? {
            Some(_) => Flow::Continue,
            None => Flow::Quit,
        })
    }

    fn report(&mut self, error: &LedgerError) -> io::Result<()> {
        warn!(%error, "menu operation failed");
        writeln!(self.output, "Error: {}", error)
    }
}
