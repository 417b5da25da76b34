//! Warning dialog widget
//!
//! Modal box for recoverable errors: bad input, duplicate names, and deletes
//! with nothing selected. The store is never touched when one is shown.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::ExpenseError;

/// Title and message of a warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningInfo {
    pub title: String,
    pub message: String,
}

impl WarningInfo {
    /// Create a warning
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Create warning info from an ExpenseError
    pub fn from_error(error: &ExpenseError) -> Self {
        Self::new(error.title(), error.to_string())
    }
}

/// Widget for rendering a warning dialog
pub struct WarningDialog<'a> {
    warning: &'a WarningInfo,
}

impl<'a> WarningDialog<'a> {
    pub fn new(warning: &'a WarningInfo) -> Self {
        Self { warning }
    }
}

impl Widget for WarningDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", self.warning.title))
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        Paragraph::new(self.warning.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}

/// Calculate the area for a warning dialog (centered in parent)
pub fn warning_dialog_area(parent: Rect) -> Rect {
    let scaled = (u32::from(parent.width) * 60 / 100) as u16;
    let width = scaled.clamp(30.min(parent.width), 70.min(parent.width));
    let height = 7.min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
