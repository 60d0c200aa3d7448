//! Terminal tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Engine**: re-exported from `tictactoe_engine`; owns the board history
//!   and the viewed move
//! - **App**: presentation state (cursor, focus, move-list order) and key
//!   handling on top of the engine
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Replay**: the same views as plain text, for scripted play
//! - **Config**: optional TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use crossterm::event::KeyCode;
//! use tictactoe_tui::{App, Settings};
//!
//! let mut app = App::new(Settings::default());
//! app.handle_key(KeyCode::Char('5'));
//! assert_eq!(app.timeline().status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
pub mod cli;
mod config;
mod input;
mod replay;
mod settings;
mod terminal;
pub mod ui;

pub use app::{App, AppControl, Focus};
pub use config::{ConfigError, TuiConfig};
pub use input::move_cursor;
pub use replay::{ReplayError, parse_moves, render_text, replay, replay_timeline};
pub use settings::{MoveOrder, Settings};
pub use terminal::run_tui;

// Crate-level exports - Game engine
pub use tictactoe_engine::{
    Board, Cell, GameStatus, Line, Mark, MoveEntry, MoveError, Position, Timeline,
    calculate_winner,
};
