//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Every mutation goes straight to the store; the table is then reloaded from
//! it so the screen always shows what is persisted.

use tracing::debug;

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::services::{ExpenseService, ExpenseSummary};
use crate::storage::ExpenseStore;

use super::widgets::{TextInput, WarningInfo};

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Price,
}

/// Main application state
pub struct App<'a> {
    /// The storage gateway
    pub store: &'a ExpenseStore,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Expenses currently shown, with their total
    pub summary: ExpenseSummary,

    /// Selected table row (if any)
    pub selected: Option<usize>,

    /// Expense name field
    pub name_input: TextInput,

    /// Price field
    pub price_input: TextInput,

    /// Which field receives typed characters
    pub focused_field: FormField,

    /// Modal warning being shown
    pub warning: Option<WarningInfo>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App and load the current expenses
    pub fn new(store: &'a ExpenseStore) -> ExpenseResult<Self> {
        let summary = ExpenseService::new(store).summary()?;

        let mut app = Self {
            store,
            should_quit: false,
            summary,
            selected: None,
            name_input: TextInput::new().label("Expense").placeholder("e.g. coffee"),
            price_input: TextInput::new().label("Price").placeholder("0.00"),
            focused_field: FormField::default(),
            warning: None,
            status_message: None,
        };
        app.sync_focus();
        Ok(app)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Reload the table from the store
    pub fn reload(&mut self) -> ExpenseResult<()> {
        self.summary = ExpenseService::new(self.store).summary()?;
        self.selected = match self.selected {
            Some(_) if self.summary.is_empty() => None,
            Some(i) => Some(i.min(self.summary.expenses.len() - 1)),
            None => None,
        };
        Ok(())
    }

    /// The expense under the selection cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.selected.and_then(|i| self.summary.expenses.get(i))
    }

    /// The input that currently has focus
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Name => &mut self.name_input,
            FormField::Price => &mut self.price_input,
        }
    }

    /// Switch focus to the other field
    pub fn toggle_focus(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Name => FormField::Price,
            FormField::Price => FormField::Name,
        };
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.name_input.focused = self.focused_field == FormField::Name;
        self.price_input.focused = self.focused_field == FormField::Price;
    }

    /// Add the expense typed into the form.
    ///
    /// Input and duplicate-name errors open a warning and leave everything
    /// as it was; other errors are returned.
    pub fn submit_form(&mut self) -> ExpenseResult<()> {
        let result = ExpenseService::new(self.store)
            .add_from_input(self.name_input.value(), self.price_input.value());

        match result {
            Ok(expense) => {
                self.name_input.clear();
                self.price_input.clear();
                self.focused_field = FormField::Name;
                self.sync_focus();
                self.reload()?;
                self.set_status(format!("Added {}", expense));
                Ok(())
            }
            Err(e) if e.is_user_error() => {
                self.show_warning(WarningInfo::from_error(&e));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Delete the selected expense
    pub fn delete_selected(&mut self) -> ExpenseResult<()> {
        let selection = self.selected_expense().cloned();
        let result = ExpenseService::new(self.store).remove_selected(selection.as_ref());

        match result {
            Ok(_) => {
                self.reload()?;
                if let Some(expense) = selection {
                    self.set_status(format!("Deleted {}", expense.name));
                }
                Ok(())
            }
            Err(e) if e.is_user_error() => {
                self.show_warning(WarningInfo::from_error(&e));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Open the warning dialog
    pub fn show_warning(&mut self, warning: WarningInfo) {
        debug!(title = %warning.title, "showing warning");
        self.warning = Some(warning);
    }

    /// Close the warning dialog
    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// Whether a warning is open
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }

    /// Move the table selection up
    pub fn move_up(&mut self) {
        if self.summary.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => self.summary.expenses.len() - 1,
        });
    }

    /// Move the table selection down
    pub fn move_down(&mut self) {
        if self.summary.is_empty() {
            return;
        }
        let last = self.summary.expenses.len() - 1;
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    /// Drop the table selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
