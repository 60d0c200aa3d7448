//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight winning triples of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The mark at the first cell of this line on `board`.
    pub fn mark_on(&self, board: &Board) -> Option<Mark> {
        board.get(self.0[0]).mark()
    }
}

/// Winning lines in reporting order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first line whose three cells hold the same mark.
///
/// `None` means nobody has three in a row yet.
#[instrument(skip(board))]
pub fn calculate_winner(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|line| {
        let [a, b, c] = line.positions();
        let cell = board.get(a);
        cell != Cell::Empty && cell == board.get(b) && cell == board.get(c)
    })
}
