//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit path (the `--db` flag)
//! 2. `EXPENSES_DB` environment variable (if set and non-empty)
//! 3. `expenses.db` in the current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Environment variable overriding the database location
pub const DB_ENV_VAR: &str = "EXPENSES_DB";

/// Default database file name
pub const DEFAULT_DB_FILE: &str = "expenses.db";

/// Resolved locations used by the expense tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensePaths {
    db_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from the environment
    pub fn new() -> Self {
        match std::env::var(DB_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => Self::with_db_file(custom),
            _ => Self::with_db_file(DEFAULT_DB_FILE),
        }
    }

    /// Resolve paths, preferring an explicit database file when given
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => Self::with_db_file(path),
            None => Self::new(),
        }
    }

    /// Use a specific database file (useful for testing)
    pub fn with_db_file(path: impl Into<PathBuf>) -> Self {
        Self {
            db_file: path.into(),
        }
    }

    /// Path of the SQLite database file
    pub fn db_file(&self) -> &Path {
        &self.db_file
    }

    /// Create the database file's parent directory if it is missing
    pub fn ensure_parent_dir(&self) -> Result<(), ExpenseError> {
        match self.db_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let paths = ExpensePaths::resolve(Some(PathBuf::from("/tmp/custom.db")));
        assert_eq!(paths.db_file(), Path::new("/tmp/custom.db"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("from-env.db");

        env::set_var(DB_ENV_VAR, &custom);
        let paths = ExpensePaths::new();
        env::remove_var(DB_ENV_VAR);

        assert_eq!(paths.db_file(), custom.as_path());
    }

    #[test]
    fn test_ensure_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("expenses.db");
        let paths = ExpensePaths::with_db_file(&nested);

        paths.ensure_parent_dir().unwrap();

        assert!(temp_dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn test_bare_file_name_needs_no_dir() {
        let paths = ExpensePaths::with_db_file(DEFAULT_DB_FILE);
        assert!(paths.ensure_parent_dir().is_ok());
    }
}
