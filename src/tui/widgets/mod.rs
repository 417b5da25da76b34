//! Reusable widgets for the TUI

pub mod input;
pub mod warning_dialog;

pub use input::TextInput;
pub use warning_dialog::{warning_dialog_area, WarningDialog, WarningInfo};
