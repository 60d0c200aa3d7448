//! Non-interactive replay: play a scripted list of moves and print the views.

use crate::settings::MoveOrder;
use derive_more::Display;
use tictactoe_engine::{Position, Timeline};
use tracing::{debug, instrument};

/// Error parsing a scripted move list.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ReplayError {
    /// A token names no cell.
    #[display("Invalid move '{}': expected a cell number 0-8 or a label like 'center'", _0)]
    InvalidMove(String),
}

impl std::error::Error for ReplayError {}

/// Parses a comma-separated list of cells into board indices.
///
/// Tokens are cell numbers (0-8) or position labels ("center",
/// "top-left"). Blank input yields no moves.
pub fn parse_moves(moves: &str) -> Result<Vec<usize>, ReplayError> {
    moves
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            Position::from_label_or_number(token)
                .map(Position::index)
                .ok_or_else(|| ReplayError::InvalidMove(token.to_string()))
        })
        .collect()
}

/// Builds a timeline from `moves`, then jumps to `jump` if given.
///
/// Moves the engine rejects (occupied cell, decided game) are skipped exactly as they would be in the interactive game.
#[instrument]
pub fn replay_timeline(moves: &str, jump: Option<usize>) -> Result<Timeline, ReplayError> {
    let mut timeline = Timeline::new();
    for index in parse_moves(moves)? {
        timeline.play(index);
    }
    if let Some(index) = jump {
        timeline.jump_to(index);
    }
    debug!(
        boards = timeline.history().len(),
        current_move = timeline.current_move(),
        "Replay finished"
    );
    Ok(timeline)
}

/// Renders board, status and move list as plain text.
pub fn render_text(timeline: &Timeline, order: MoveOrder) -> String {
    let mut out = String::new();
    out.push_str(&timeline.current_board().display());
    out.push_str("\n\n");
    out.push_str(&timeline.status().to_string());
    out.push_str(&format!("\n\nMoves (Order: {}):\n", order.label()));
    for entry in order.apply(timeline.move_list()) {
        out.push_str(&format!("  {}\n", entry));
    }
    out
}

/// Replays `moves` and renders the result.
pub fn replay(moves: &str, jump: Option<usize>, order: MoveOrder) -> Result<String, ReplayError> {
    let timeline = replay_timeline(moves, jump)?;
    Ok(render_text(&timeline, order))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(parse_moves("0, 4,8"), Ok(vec![0, 4, 8]));
        assert_eq!(parse_moves("center,Top-left"), Ok(vec![4, 0]));
        assert_eq!(
            parse_moves("9"),
            Err(ReplayError::InvalidMove("9".to_string()))
        );
        assert_eq!(parse_moves(""), Ok(vec![]));
        assert_eq!(
            parse_moves("0,x"),
            Err(ReplayError::InvalidMove("x".to_string()))
        );
    }

    #[test]
    fn test_rejected_moves_are_skipped() {
        let timeline = replay_timeline("4,4,0", None).expect("valid script");
        assert_eq!(timeline.history().len(), 3);
        assert_eq!(timeline.status().to_string(), "Next player: X");
    }
}
