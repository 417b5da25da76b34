//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod expense;

pub use expense::{handle_expense_command, ExpenseCommands};
