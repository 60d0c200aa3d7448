//! Application state and key handling.
//!
//! The [`App`] owns the game engine plus state that only matters to the
//! screen: board cursor, focused pane, move-list order and selection. Every
//! key is applied to completion before the next frame is drawn from it.

use crate::input::move_cursor;
use crate::settings::{MoveOrder, Settings};
use crossterm::event::KeyCode;
use tictactoe_engine::{MoveEntry, Position, Timeline};
use tracing::{debug, info, instrument};

/// Pane receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    /// Redraw and wait for the next key.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    focus: Focus,
    move_order: MoveOrder,
    selected: usize,
    hint: Option<String>,
    highlight_winning_line: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(settings: Settings) -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            move_order: settings.move_order,
            selected: 0,
            hint: None,
            highlight_winning_line: settings.highlight_winning_line,
        }
    }

    /// The game engine.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current move-list order.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Selected row of [`App::displayed_moves`].
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Why the last move was rejected, until the next accepted action.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Whether winning cells are highlighted.
    pub fn highlight_winning_line(&self) -> bool {
        self.highlight_winning_line
    }

    /// Move list in display order.
    pub fn displayed_moves(&self) -> Vec<MoveEntry> {
        self.move_order.apply(self.timeline.move_list())
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(focus = ?self.focus, current_move = self.timeline.current_move()))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppControl {
        match key {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                info!("User quit");
                return AppControl::Quit;
            }
            KeyCode::Char('r' | 'R') => self.restart(),
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('o' | 'O') => self.toggle_order(),
            KeyCode::Char('[') => {
                self.timeline.step_back();
                self.after_navigation();
            }
            KeyCode::Char(']') => {
                self.timeline.step_forward();
                self.after_navigation();
            }
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppControl::Continue
    }

    /// Starts a new game, keeping presentation settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.timeline.reset();
        self.cursor = Position::Center;
        self.hint = None;
        self.sync_selection();
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let rows = self.timeline.history().len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(rows - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.displayed_moves().get(self.selected)
                    && entry.is_actionable()
                {
                    self.timeline.jump_to(entry.index);
                    self.after_navigation();
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        match self.timeline.try_play(pos) {
            Ok(_) => {
                self.hint = None;
                self.sync_selection();
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.hint = Some(e.to_string());
            }
        }
    }

    fn toggle_order(&mut self) {
        let rows = self.timeline.history().len();
        self.move_order = self.move_order.toggle();
        // Keep the same history entry selected.
        self.selected = rows - 1 - self.selected.min(rows - 1);
    }

    fn after_navigation(&mut self) {
        self.hint = None;
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        let current = self.timeline.current_move();
        self.selected = match self.move_order {
            MoveOrder::Ascending => current,
            MoveOrder::Descending => self.timeline.history().len() - 1 - current,
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
