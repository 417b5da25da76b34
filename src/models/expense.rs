//! Expense model
//!
//! An expense is a named amount. Names are the business key: the store keeps
//! at most one record per distinct name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique name of the expense
    pub name: String,

    /// Amount, may be negative
    pub amount: f64,
}

impl Expense {
    /// Create a new expense
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }

        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.name, self.amount)
    }
}

/// Parse a user-entered price
///
/// Accepts plain decimal notation with an optional sign ("12", "-3.5",
/// "+0.25"). Infinities and NaN are rejected since the price column is
/// `NOT NULL` and SQLite stores NaN as NULL.
pub fn parse_amount(text: &str) -> Result<f64, ExpenseValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExpenseValidationError::EmptyAmount);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExpenseValidationError::InvalidAmount(trimmed.to_string())),
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyName,
    EmptyAmount,
    InvalidAmount(String),
    NonFiniteAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::EmptyAmount => write!(f, "Price cannot be empty"),
            Self::InvalidAmount(s) => write!(f, "Invalid price: '{}'", s),
            Self::NonFiniteAmount => write!(f, "Price must be a finite number"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
