//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::error;

use crate::storage::ExpenseStore;

use super::app::App;
use super::event::next_event;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application until the user quits.
///
/// The terminal is restored whether the loop ends normally or with an error.
pub fn run_tui(store: &ExpenseStore) -> Result<()> {
    let mut app = App::new(store)?;

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal();

    loop_error_first(result, restored)
}

/// Combine the loop outcome with the terminal restore outcome.
///
/// A loop error wins; a restore failure on top of it is only logged.
fn loop_error_first(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(loop_err), Err(restore_err)) => {
            error!(error = %restore_err, "failed to restore terminal");
            Err(loop_err)
        }
        (result, restored) => result.and(restored),
    }
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &*app))?;
        handle_event(app, next_event()?)?;
    }
    Ok(())
}
