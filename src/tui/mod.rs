//! Terminal User Interface module
//!
//! A single screen: an entry form for name and price, the expense table, and
//! the running total. Built on ratatui with the crossterm backend.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
