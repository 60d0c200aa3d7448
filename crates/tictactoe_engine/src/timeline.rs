//! History-backed game engine with time travel.
//!
//! A [`Timeline`] keeps every board from the empty start to the latest move
//! and a cursor into that list. Playing from an earlier board discards the
//! boards after it, so only the active branch survives.

use super::error::MoveError;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::move_list::MoveEntry;
use super::rules::{self, Line};
use super::status::GameStatus;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe engine state: board history plus the viewed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    history: Vec<Board>,
    current_move: usize,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Discards all history and starts over.
    #[instrument(skip(self), fields(moves = self.history.len() - 1))]
    pub fn reset(&mut self) {
        debug!("Resetting timeline");
        *self = Self::new();
    }

    /// Plays the mover's mark at cell `index` (0-8).
    ///
    /// Off-board cells, occupied cells and decided boards are ignored.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, index: usize) {
        let result = Position::from_index(index)
            .ok_or(MoveError::CellOutOfRange(index))
            .and_then(|pos| self.try_play(pos));
        if let Err(e) = result {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Plays at `pos`, reporting why the move was rejected.
    ///
    /// On success the history past the viewed board is dropped, the new
    /// board is appended and becomes the viewed one.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameDecided`] if the viewed board has a winning line.
    /// - [`MoveError::CellOccupied`] if `pos` is already marked.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_play(&mut self, pos: Position) -> Result<Position, MoveError> {
        let board = self.current_board();

        if rules::calculate_winner(board).is_some() {
            return Err(MoveError::GameDecided);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mark = self.next_mark();
        let next = board.with_mark(pos, mark);

        let discarded = self.history.len() - self.current_move - 1;
        if discarded > 0 {
            debug!(discarded, "Dropping boards past the viewed move");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(%mark, position = %pos, move_number = self.current_move, "Move played");
        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "timeline invariants violated after play"
        );

        Ok(pos)
    }

    /// Views the board at history index `index`.
    ///
    /// Indices past the end of history are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        if let Err(e) = self.try_jump_to(index) {
            warn!(error = %e, "Jump ignored");
        }
    }

    /// Views the board at history index `index`, reporting an invalid target.
    ///
    /// # Errors
    ///
    /// [`MoveError::MoveOutOfRange`] if `index >= history().len()`.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.history.len() {
            return Err(MoveError::MoveOutOfRange {
                requested: index,
                len: self.history.len(),
            });
        }
        self.current_move = index;
        debug!(current_move = index, "Jumped");
        Ok(())
    }

    /// Views the previous board, if there is one.
    pub fn step_back(&mut self) {
        if let Some(prev) = self.current_move.checked_sub(1) {
            self.jump_to(prev);
        }
    }

    /// Views the next board, if there is one.
    pub fn step_forward(&mut self) {
        if self.current_move + 1 < self.history.len() {
            self.jump_to(self.current_move + 1);
        }
    }

    /// The board being viewed.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Every board from game start to the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the viewed board in history.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Mark that moves from the viewed board.
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    /// The first complete line on the viewed board.
    pub fn winning_line(&self) -> Option<Line> {
        rules::calculate_winner(self.current_board())
    }

    /// Status of the viewed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(line) = rules::calculate_winner(board)
            && let Some(mark) = line.mark_on(board)
        {
            return GameStatus::Won { mark, line };
        }
        if rules::is_full(board) {
            return GameStatus::Draw;
        }
        GameStatus::InProgress {
            next: self.next_mark(),
        }
    }

    /// One entry per board in history, in ascending order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(index, board)| MoveEntry {
                index,
                position: index
                    .checked_sub(1)
                    .and_then(|prev| rules::find_move(board, &self.history[prev])),
                is_current: index == self.current_move,
            })
            .collect()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn played(moves: &[usize]) -> Timeline {
        let mut timeline = Timeline::new();
        for m in moves {
            timeline.play(*m);
        }
        timeline
    }

    #[test]
    fn test_new_timeline() {
        let timeline = Timeline::new();
        assert_eq!(timeline.history().len(), 1);
        assert_eq!(timeline.current_move(), 0);
        assert_eq!(timeline.current_board(), &Board::new());
        assert_eq!(timeline.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_play_places_mover_mark_only() {
        let mut timeline = played(&[4]);
        let before = timeline.current_board().clone();
        timeline.play(0);

        let after = timeline.current_board();
        assert_eq!(after.get(Position::TopLeft), Cell::Occupied(Mark::O));
        for pos in Position::ALL.into_iter().filter(|p| *p != Position::TopLeft) {
            assert_eq!(after.get(pos), before.get(pos));
        }
    }

    #[test]
    fn test_try_play_reports_reason() {
        let mut timeline = played(&[0]);
        assert_eq!(
            timeline.try_play(Position::TopLeft),
            Err(MoveError::CellOccupied(Position::TopLeft))
        );

        let mut won = played(&[0, 3, 1, 4, 2]);
        assert_eq!(won.try_play(Position::BottomRight), Err(MoveError::GameDecided));
    }

    #[test]
    fn test_off_board_play_is_ignored() {
        let mut timeline = played(&[0]);
        let before = timeline.clone();
        timeline.play(9);
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut timeline = played(&[0, 1]);
        assert_eq!(
            timeline.try_jump_to(3),
            Err(MoveError::MoveOutOfRange { requested: 3, len: 3 })
        );
        timeline.jump_to(7);
        assert_eq!(timeline.current_move(), 2);
    }

    #[test]
    fn test_step_back_and_forward_stay_in_range() {
        let mut timeline = played(&[0, 1]);
        timeline.step_forward();
        assert_eq!(timeline.current_move(), 2);
        timeline.step_back();
        timeline.step_back();
        timeline.step_back();
        assert_eq!(timeline.current_move(), 0);
        timeline.step_forward();
        assert_eq!(timeline.current_move(), 1);
    }

    #[test]
    fn test_status_follows_viewed_board() {
        let mut timeline = played(&[0, 3, 1, 4, 2]);
        assert_eq!(timeline.status().to_string(), "Winner: X");
        timeline.jump_to(4);
        assert_eq!(timeline.status().to_string(), "Next player: X");
        timeline.jump_to(1);
        assert_eq!(timeline.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_move_list_positions() {
        let timeline = played(&[4, 8]);
        let labels: Vec<String> = timeline.move_list().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Go to move #1 (1, 1)",
                "You are at move #2 (2, 2)",
            ]
        );
    }

    #[test]
    fn test_reset() {
        let mut timeline = played(&[0, 1, 2]);
        timeline.reset();
        assert_eq!(timeline, Timeline::new());
    }
}
