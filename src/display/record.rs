//! Record display formatting
//!
//! Formats records for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::DisplayFormat;
use crate::models::Record;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Modified")]
    modified: String,
}

/// Format the whole ledger as a numbered table
///
/// Numbers are 1-based positions, the same numbers the edit prompts expect.
pub fn format_record_table(records: &[Record], format: &DisplayFormat) -> String {
    if records.is_empty() {
        return "No records found.".to_string();
    }

    let rows = records.iter().enumerate().map(|(i, record)| RecordRow {
        number: i + 1,
        date: format.date(record.date),
        category: record.category.to_string(),
        amount: format.amount(record.amount.value()),
        description: record.description.clone(),
        modified: record
            .modified_date
            .map(|d| format.date(d))
            .unwrap_or_default(),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Format one record as labelled lines
pub fn format_record_details(record: &Record, format: &DisplayFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("Date:        {}\n", format.date(record.date)));
    output.push_str(&format!("Category:    {}\n", record.category));
    output.push_str(&format!("Amount:      {}\n", format.amount(record.amount.value())));
    output.push_str(&format!("Description: {}\n", record.description));

    if let Some(modified) = record.modified_date {
        output.push_str(&format!("Modified:    {}\n", format.date(modified)));
    }

    output
}

/// Format search results, one detail block per record
pub fn format_search_results(records: &[Record], format: &DisplayFormat) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = format!("Found {} record(s):\n\n", records.len());
    for record in records {
        output.push_str(&format_record_details(record, format));
        output.push('\n');
    }
    output
}
