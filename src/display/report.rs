//! Balance report formatting

use super::DisplayFormat;
use crate::models::{BalanceKind, BalanceSummary};

/// One aggregate as a sentence, e.g. `Current balance: $500.00`
pub fn format_balance_line(kind: BalanceKind, value: f64, format: &DisplayFormat) -> String {
    format!("Current {}: {}", kind, format.amount(value))
}

/// All three aggregates, right-aligned
pub fn format_summary(summary: &BalanceSummary, format: &DisplayFormat) -> String {
    let income = format.amount(summary.income);
    let expenses = format.amount(summary.expenses);
    let balance = format.amount(summary.balance);
    let width = [&income, &expenses, &balance]
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("Income:   {:>width$}\n", income, width = width));
    output.push_str(&format!("Expenses: {:>width$}\n", expenses, width = width));
    output.push_str(&format!("{}\n", "─".repeat(10 + width)));
    output.push_str(&format!("Balance:  {:>width$}\n", balance, width = width));
    output
}
