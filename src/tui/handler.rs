//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        // Terminal will redraw automatically
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // The warning dialog is modal
    if app.has_warning() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dismiss_warning();
        }
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => app.quit(),
            KeyCode::Char('d') => app.delete_selected()?,
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter => app.submit_form()?,
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::Delete => app.delete_selected()?,
        KeyCode::Esc => app.clear_selection(),
        KeyCode::Backspace => app.focused_input().backspace(),
        KeyCode::Left => app.focused_input().move_left(),
        KeyCode::Right => app.focused_input().move_right(),
        KeyCode::Home => app.focused_input().move_start(),
        KeyCode::End => app.focused_input().move_end(),
        KeyCode::Char(c) => app.focused_input().insert(c),
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ExpenseStore;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_type_and_submit() {
        let store = ExpenseStore::open_in_memory().unwrap();
        let mut app = App::new(&store).unwrap();

        type_text(&mut app, "coffee");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "3.5");
        press(&mut app, KeyCode::Enter);

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(app.summary.total.to_string(), "3.50");
    }

    #[test]
    fn test_warning_is_modal() {
        let store = ExpenseStore::open_in_memory().unwrap();
        let mut app = App::new(&store).unwrap();

        press(&mut app, KeyCode::Delete);
        assert!(app.has_warning());

        // Typing while the warning is open does nothing
        type_text(&mut app, "x");
        assert_eq!(app.name_input.value(), "");

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_warning());
    }

    #[test]
    fn test_select_and_delete() {
        let store = ExpenseStore::open_in_memory().unwrap();
        store.add("coffee", 3.5).unwrap();
        store.add("book", 12.25).unwrap();
        let mut app = App::new(&store).unwrap();

        press(&mut app, KeyCode::Down);
        ctrl(&mut app, 'd');

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(app.summary.expenses[0].name, "book");
    }

    #[test]
    fn test_ctrl_q_quits() {
        let store = ExpenseStore::open_in_memory().unwrap();
        let mut app = App::new(&store).unwrap();

        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.name_input.value(), "q");

        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }
}
