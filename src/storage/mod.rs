//! Storage layer for the expense tracker
//!
//! A single SQLite file holds one `expenses` table. [`ExpenseStore`] is the
//! only component that talks to it.

pub mod expenses;

pub use expenses::ExpenseStore;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

/// Open the store at the resolved database path, creating directories as needed
pub fn open_store(paths: &ExpensePaths) -> ExpenseResult<ExpenseStore> {
    paths.ensure_parent_dir()?;
    ExpenseStore::open(paths.db_file())
}
