//! UI rendering using ratatui.
//!
//! Every function here is a pure view of [`App`]; nothing is mutated while
//! drawing.

mod board;
mod moves;

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use moves::render_moves;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and move list
            Constraint::Length(4), // Status
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, body[0], app);
    render_moves(f, body[1], app);

    let mut lines = vec![Line::styled(
        app.timeline().status().to_string(),
        Style::default().fg(Color::Yellow),
    )];
    if let Some(hint) = app.hint() {
        lines.push(Line::styled(hint.to_string(), Style::default().fg(Color::Red)));
    }
    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = match app.focus() {
        Focus::Board => "Arrows/1-9: choose | Enter: play | Tab: moves | [ ]: step | O: order | R: restart | Q: quit",
        Focus::History => "Up/Down: select | Enter: jump | Tab: board | [ ]: step | O: order | R: restart | Q: quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}
