//! Business logic layer
//!
//! Services sit between the front ends (CLI, TUI) and the storage layer.

pub mod expense;

pub use expense::{ExpenseService, ExpenseSummary};
