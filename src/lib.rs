//! Expense tracker - record named expenses and keep a running total
//!
//! Expenses live in a single local SQLite file. The library exposes the
//! storage gateway, the input rules shared by both front ends, and the
//! front ends themselves.
//!
//! # Architecture
//!
//! - `config`: Database path resolution
//! - `error`: Custom error types
//! - `models`: The expense record and the running total
//! - `storage`: SQLite gateway over the `expenses` table
//! - `services`: Form and selection checks in front of the store
//! - `display`: Table formatting for CLI output
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal screen
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::total;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let store = ExpenseStore::open("expenses.db")?;
//! store.add("coffee", 3.5)?;
//! println!("Total: {}", total(&store.list_all()?));
//! store.close()?;
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
