//! SQLite-backed expense store
//!
//! Owns the single database connection for the lifetime of the process and
//! exposes the four operations the rest of the application is built on:
//! schema creation, insert, delete and list.

use std::path::{Path, PathBuf};

use rusqlite::{ffi, params, Connection, ErrorCode};
use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        expense_name TEXT UNIQUE NOT NULL,
        price REAL NOT NULL
    )
";

/// Gateway over the `expenses` table
pub struct ExpenseStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl ExpenseStore {
    /// Open (or create) the database file and make sure the table exists
    pub fn open(path: impl AsRef<Path>) -> ExpenseResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.ensure_schema()?;

        info!(path = %path.display(), "opened expense store");
        Ok(store)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> ExpenseResult<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        store.ensure_schema()?;
        Ok(store)
    }

    /// Location of the backing file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the `expenses` table if it does not exist yet
    pub fn ensure_schema(&self) -> ExpenseResult<()> {
        self.conn.execute_batch(CREATE_TABLE)?;
        Ok(())
    }

    /// Insert a new expense.
    ///
    /// Fails with [`ExpenseError::DuplicateName`] when `name` is already
    /// stored; the table is left unchanged in that case.
    pub fn add(&self, name: &str, amount: f64) -> ExpenseResult<()> {
        self.conn
            .execute(
                "INSERT INTO expenses (expense_name, price) VALUES (?1, ?2)",
                params![name, amount],
            )
            .map_err(|e| translate_insert_error(name, e))?;

        debug!(name, amount, "added expense");
        Ok(())
    }

    /// Delete the expense with exactly this name.
    ///
    /// Deleting a name that is not stored is a no-op, not an error. The
    /// number of removed rows (0 or 1) is returned for callers that care.
    pub fn remove(&self, name: &str) -> ExpenseResult<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM expenses WHERE expense_name = ?1", params![name])?;

        debug!(name, removed, "removed expense");
        Ok(removed)
    }

    /// All stored expenses, in insertion order
    pub fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        let mut stmt = self
            .conn
            .prepare("SELECT expense_name, price FROM expenses ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(Expense {
                name: row.get(0)?,
                amount: row.get(1)?,
            })
        })?;

        let expenses = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(count = expenses.len(), "listed expenses");
        Ok(expenses)
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Close the connection, reporting any error from SQLite.
    ///
    /// Dropping the store closes the connection as well; this variant exists
    /// so shutdown can surface close failures.
    pub fn close(self) -> ExpenseResult<()> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, e)| ExpenseError::Storage(format!("Failed to close database: {}", e)))?;

        if let Some(path) = path {
            info!(path = %path.display(), "closed expense store");
        }
        Ok(())
    }
}

/// Map a unique-constraint failure on insert to the domain error
fn translate_insert_error(name: &str, err: rusqlite::Error) -> ExpenseError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            ExpenseError::duplicate(name)
        }
        _ => ExpenseError::from(err),
    }
}
