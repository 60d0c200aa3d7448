//! Move-list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Renders the move list in the app's current order.
///
/// The viewed move is bold; the selection is only shown while the list has
/// focus.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .displayed_moves()
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.to_string()).style(style)
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Moves (Order: {})", app.move_order().label())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    f.render_stateful_widget(list, area, &mut state);
}
