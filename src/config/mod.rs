//! Configuration module for the expense tracker
//!
//! The only configurable location is the database file; see [`paths`].

pub mod paths;

pub use paths::ExpensePaths;
