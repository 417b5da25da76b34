//! Core data models for the expense tracker

pub mod expense;
pub mod total;

pub use expense::{parse_amount, Expense, ExpenseValidationError};
pub use total::{total, Total};
