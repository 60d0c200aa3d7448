//! Tests for key handling on top of the engine.

use crossterm::event::KeyCode;
use tictactoe_tui::{App, AppControl, Cell, Focus, Mark, MoveOrder, Position, Settings};

fn app() -> App {
    App::new(Settings::default())
}

#[test]
fn test_digit_plays_cell() {
    let mut app = app();
    assert_eq!(app.handle_key(KeyCode::Char('1')), AppControl::Continue);
    assert_eq!(
        app.timeline().current_board().get(Position::TopLeft),
        Cell::Occupied(Mark::X)
    );
    assert_eq!(app.timeline().status().to_string(), "Next player: O");
}

#[test]
fn test_cursor_and_enter_play() {
    let mut app = app();
    assert_eq!(app.cursor(), Position::Center);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Right);
    app.handle_key(KeyCode::Right);
    assert_eq!(app.cursor(), Position::TopRight);
    app.handle_key(KeyCode::Enter);
    assert_eq!(
        app.timeline().current_board().get(Position::TopRight),
        Cell::Occupied(Mark::X)
    );
}

#[test]
fn test_rejected_move_sets_hint() {
    let mut app = app();
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('5'));
    assert_eq!(app.timeline().history().len(), 2);
    assert!(app.hint().is_some_and(|h| h.contains("already occupied")));

    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.hint(), None);
}

#[test]
fn test_history_enter_jumps_without_changing_history() {
    let mut app = app();
    for key in ['1', '2', '3'] {
        app.handle_key(KeyCode::Char(key));
    }
    app.handle_key(KeyCode::Tab);
    assert_eq!(app.focus(), Focus::History);
    assert_eq!(app.selected(), 3);

    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Up);
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.timeline().current_move(), 1);
    assert_eq!(app.timeline().history().len(), 4);
}

#[test]
fn test_descending_order_selection_tracks_entry() {
    let mut app = app();
    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('2'));
    assert_eq!(app.selected(), 2);

    app.handle_key(KeyCode::Char('o'));
    assert_eq!(app.move_order(), MoveOrder::Descending);
    assert_eq!(app.selected(), 0);
    assert_eq!(app.displayed_moves()[0].index, 2);

    // Down in descending order moves toward game start.
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.timeline().current_move(), 1);
}

#[test]
fn test_step_keys() {
    let mut app = app();
    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('2'));
    app.handle_key(KeyCode::Char('['));
    app.handle_key(KeyCode::Char('['));
    assert_eq!(app.timeline().current_move(), 0);
    app.handle_key(KeyCode::Char(']'));
    assert_eq!(app.timeline().current_move(), 1);
}

#[test]
fn test_restart_keeps_order() {
    let mut app = app();
    app.handle_key(KeyCode::Char('o'));
    app.handle_key(KeyCode::Char('1'));
    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.timeline().history().len(), 1);
    assert_eq!(app.cursor(), Position::Center);
    assert_eq!(app.move_order(), MoveOrder::Descending);
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert_eq!(app.handle_key(KeyCode::Char('q')), AppControl::Quit);
    assert_eq!(app.handle_key(KeyCode::Esc), AppControl::Quit);
}

#[test]
fn test_shortcuts_accept_either_case() {
    let mut app = app();
    app.handle_key(KeyCode::Char('O'));
    assert_eq!(app.move_order(), MoveOrder::Descending);

    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('R'));
    assert_eq!(app.timeline().history().len(), 1);

    assert_eq!(app.handle_key(KeyCode::Char('Q')), AppControl::Quit);
}
