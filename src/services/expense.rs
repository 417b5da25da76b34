//! Expense service
//!
//! Holds the checks the front ends apply before touching the store: both
//! form fields must be filled in, the price must parse, and a delete needs a
//! selected row. The store itself only enforces name uniqueness.

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, total, Expense, Total};
use crate::storage::ExpenseStore;

/// Message shown when either form field is left blank
pub const MISSING_INPUT: &str = "Please enter both expense name and price.";

/// Message shown when deleting with nothing selected
pub const NOTHING_SELECTED: &str = "Please select an expense to delete.";

/// Snapshot of the store with its running total
#[derive(Debug, Clone)]
pub struct ExpenseSummary {
    pub expenses: Vec<Expense>,
    pub total: Total,
}

impl ExpenseSummary {
    /// Build a summary from already loaded records
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let total = total(&expenses);
        Self { expenses, total }
    }

    /// Whether there are no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Add an expense from raw form text
    pub fn add_from_input(&self, name_text: &str, amount_text: &str) -> ExpenseResult<Expense> {
        let name = name_text.trim();
        let amount_text = amount_text.trim();

        if name.is_empty() || amount_text.is_empty() {
            debug!("rejected expense with missing fields");
            return Err(ExpenseError::Input(MISSING_INPUT.into()));
        }

        let amount = parse_amount(amount_text).map_err(|e| {
            debug!(input = amount_text, "rejected unparseable price");
            ExpenseError::Input(e.to_string())
        })?;

        let expense = Expense::new(name, amount);
        expense
            .validate()
            .map_err(|e| ExpenseError::Input(e.to_string()))?;

        self.store.add(&expense.name, expense.amount).map_err(|e| {
            if e.is_duplicate() {
                debug!(name = %expense.name, "rejected duplicate expense");
            }
            e
        })?;

        Ok(expense)
    }

    /// Remove the selected expense, if any
    pub fn remove_selected(&self, selection: Option<&Expense>) -> ExpenseResult<usize> {
        let expense =
            selection.ok_or_else(|| ExpenseError::Selection(NOTHING_SELECTED.into()))?;
        self.remove_by_name(&expense.name)
    }

    /// Remove an expense by exact name; absent names are ignored
    pub fn remove_by_name(&self, name: &str) -> ExpenseResult<usize> {
        let removed = self.store.remove(name)?;
        if removed == 0 {
            debug!(name, "no expense matched delete");
        }
        Ok(removed)
    }

    /// All expenses in store order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.list_all()
    }

    /// Fresh listing plus running total
    pub fn summary(&self) -> ExpenseResult<ExpenseSummary> {
        Ok(ExpenseSummary::from_expenses(self.store.list_all()?))
    }
}
