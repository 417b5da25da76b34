//! Event handling for the TUI
//!
//! Reads terminal events synchronously. The UI has nothing to do between
//! key presses, so the loop simply blocks on the next event.

use std::io;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Terminal events the UI reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Block until the next relevant terminal event
pub fn next_event() -> io::Result<Event> {
    loop {
        match event::read()? {
            CrosstermEvent::Key(key) => return Ok(Event::Key(key)),
            CrosstermEvent::Resize(width, height) => return Ok(Event::Resize(width, height)),
            _ => {}
        }
    }
}
