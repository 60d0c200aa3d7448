//! Locating the cell filled between two consecutive boards.

use super::super::{Board, Position};

/// Returns the first position where `current` differs from `previous`.
///
/// Consecutive boards in a history differ in exactly one cell, so this is
/// the move that produced `current`. Identical boards yield `None`; boards
/// differing in several cells yield the lowest differing position.
pub fn find_move(current: &Board, previous: &Board) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|pos| current.get(*pos) != previous.get(*pos))
}
