//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board) or a pair of boards.
//! Nothing here knows about history; the timeline composes these.

pub mod delta;
pub mod draw;
pub mod win;

pub use delta::find_move;
pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, calculate_winner};
