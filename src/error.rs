//! Custom error types for the expense tracker
//!
//! Only a handful of failures are recoverable: bad form input, a duplicate
//! expense name, and deleting with nothing selected. Everything the storage
//! engine reports beyond that is surfaced as a `Storage` error and ends the
//! current operation.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// An expense with this name is already stored
    #[error("Expense '{name}' already exists.")]
    DuplicateName { name: String },

    /// Missing or malformed user input
    #[error("{0}")]
    Input(String),

    /// A delete was attempted without a selected row
    #[error("{0}")]
    Selection(String),

    /// Unrecoverable storage failure (disk error, corruption, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ExpenseError {
    /// Create a duplicate-name error
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Check if this is a duplicate-name error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateName { .. })
    }

    /// Whether the error is one the user can fix and retry.
    ///
    /// Input, duplicate-name and selection errors leave the store untouched
    /// and are shown as warnings; anything else aborts the operation.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateName { .. } | Self::Input(_) | Self::Selection(_)
        )
    }

    /// Dialog title used when presenting a user error
    pub fn title(&self) -> &'static str {
        match self {
            Self::DuplicateName { .. } | Self::Input(_) => "Input Error",
            Self::Selection(_) => "Selection Error",
            Self::Storage(_) => "Storage Error",
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Json(_) => "Data Error",
        }
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

// Generic storage failures only. Unique-constraint violations are mapped to
// `DuplicateName` by the store before this conversion is reached.
impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let err = ExpenseError::duplicate("rent");
        assert_eq!(err.to_string(), "Expense 'rent' already exists.");
        assert!(err.is_duplicate());
        assert!(err.is_user_error());
        assert_eq!(err.title(), "Input Error");
    }

    #[test]
    fn test_selection_error() {
        let err = ExpenseError::Selection("Please select an expense to delete.".into());
        assert_eq!(err.to_string(), "Please select an expense to delete.");
        assert_eq!(err.title(), "Selection Error");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_storage_error_is_fatal() {
        let err = ExpenseError::Storage("disk I/O error".into());
        assert_eq!(err.to_string(), "Storage error: disk I/O error");
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let err: ExpenseError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }
}
