//! Tic-tac-toe engine with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`] and [`Position`]
//! - **Rules**: pure functions for winning lines, full boards and the cell
//!   filled between two boards
//! - **Timeline**: the game engine. It keeps every board since game start,
//!   lets the viewer jump to any of them, and derives the status line and
//!   move list from the viewed board
//! - **Invariants**: properties of a timeline checked after each move in
//!   debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::Timeline;
//!
//! let mut game = Timeline::new();
//! game.play(0);
//! game.play(4);
//! assert_eq!(game.status().to_string(), "Next player: X");
//!
//! game.jump_to(0);
//! game.play(8);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod status;
mod timeline;
mod types;

pub use error::MoveError;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TimelineInvariants};
pub use move_list::MoveEntry;
pub use position::Position;
pub use rules::{Line, calculate_winner, find_move};
pub use status::GameStatus;
pub use timeline::Timeline;
pub use types::{Board, Cell, Mark};
