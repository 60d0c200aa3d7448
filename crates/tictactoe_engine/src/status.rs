//! Game status derived from the viewed board.

use super::rules::Line;
use super::Mark;
use serde::{Deserialize, Serialize};

/// Status of the board currently being viewed.
///
/// The `Display` form is the status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Nobody has won and empty cells remain.
    #[display("Next player: {}", next)]
    InProgress {
        /// Mark that moves next from this board.
        next: Mark,
    },
    /// A line is complete.
    #[display("Winner: {}", mark)]
    Won {
        /// The winning mark.
        mark: Mark,
        /// The first complete line in reporting order.
        line: Line,
    },
    /// Full board with no line.
    #[display("It's a draw!")]
    Draw,
}

impl GameStatus {
    /// Whether no further moves are accepted from this board.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// The winning line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}
