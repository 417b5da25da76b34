//! Expense display formatting
//!
//! Amounts are rendered with two decimal places here and in the TUI; nothing
//! upstream rounds them.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::services::ExpenseSummary;

/// One table row
#[derive(Tabled)]
struct ExpenseRow<'a> {
    #[tabled(rename = "Expense")]
    name: &'a str,
    #[tabled(rename = "Price")]
    price: String,
}

/// Format an amount to two decimal places
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Format the expense list as a table followed by the total
pub fn format_expense_table(summary: &ExpenseSummary) -> String {
    if summary.is_empty() {
        return format!("No expenses recorded.\nTotal: {}", summary.total);
    }

    let rows = summary.expenses.iter().map(|e| ExpenseRow {
        name: &e.name,
        price: format_amount(e.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));

    format!("{}\nTotal: {}", table, summary.total)
}
