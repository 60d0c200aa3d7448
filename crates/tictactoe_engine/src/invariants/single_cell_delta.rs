//! Consecutive boards differ by exactly one newly filled cell.

use super::super::{Cell, Position, Timeline};
use super::Invariant;

/// Invariant: each board adds exactly one mark to its predecessor.
///
/// The first board is empty, and no cell is ever cleared or overwritten.
pub struct SingleCellDeltaInvariant;

impl Invariant<Timeline> for SingleCellDeltaInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let history = timeline.history();
        let starts_empty = history.first().is_some_and(|b| b.occupied() == 0);

        starts_empty
            && history.windows(2).all(|pair| {
                let changed: Vec<Position> = Position::ALL
                    .into_iter()
                    .filter(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                    .collect();
                matches!(
                    changed.as_slice(),
                    [pos] if pair[0].get(*pos) == Cell::Empty
                )
            })
    }

    fn description() -> &'static str {
        "Each board fills exactly one empty cell of the previous board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_play() {
        let mut timeline = Timeline::new();
        timeline.play(4);
        timeline.play(0);
        assert!(SingleCellDeltaInvariant::holds(&timeline));
    }
}
