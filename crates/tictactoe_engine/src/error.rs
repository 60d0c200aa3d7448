//! Reasons a move or jump was rejected.

use super::Position;

/// Error returned by the checked timeline operations.
///
/// The unchecked operations treat every variant as a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell {} is off the board", _0)]
    CellOutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The viewed board already has a winning line.
    #[display("Game is already decided")]
    GameDecided,

    /// Jump target past the end of history.
    #[display("Move #{} does not exist (history has {} boards)", requested, len)]
    MoveOutOfRange {
        /// Requested history index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
