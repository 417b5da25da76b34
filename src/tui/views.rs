//! Screen rendering
//!
//! Layout, top to bottom: entry form, expense table, total, key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_amount;

use super::app::App;
use super::widgets::{warning_dialog_area, WarningDialog};

/// Layout regions of the screen
pub struct AppLayout {
    pub form: Rect,
    pub table: Rect,
    pub total: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Form
                Constraint::Min(3),    // Table
                Constraint::Length(1), // Total
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            form: chunks[0],
            table: chunks[1],
            total: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_form(frame, app, layout.form);
    render_table(frame, app, layout.table);
    render_total(frame, app, layout.total);
    render_status_bar(frame, app, layout.status_bar);

    if let Some(warning) = &app.warning {
        let area = warning_dialog_area(frame.area());
        frame.render_widget(WarningDialog::new(warning), area);
    }
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" New Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    frame.render_widget(&app.name_input, fields[0]);
    frame.render_widget(&app.price_input, fields[1]);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Expense", "Price"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = app
        .summary
        .expenses
        .iter()
        .map(|e| Row::new(vec![e.name.clone(), format_amount(e.amount)]));

    let table = Table::new(rows, [Constraint::Percentage(70), Constraint::Percentage(30)])
        .header(header)
        .block(Block::default().title(" Expenses ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(app.selected);
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_total(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Total: ", Style::default().fg(Color::White)),
        Span::styled(
            app.summary.total.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = "Tab switch field │ Enter add │ ↑↓ select │ Del delete │ Ctrl-Q quit";
    let text = match &app.status_message {
        Some(message) => format!(" {} │ {}", message, hints),
        None => format!(" {}", hints),
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
