//! Marks alternate X, O, X, ... through history.

use super::super::{Mark, Timeline, rules};
use super::Invariant;

/// Invariant: the cell filled to reach board `k` holds X when `k - 1` is even.
pub struct AlternatingMarksInvariant;

impl Invariant<Timeline> for AlternatingMarksInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let history = timeline.history();
        history.windows(2).enumerate().all(|(prev, pair)| {
            rules::find_move(&pair[1], &pair[0])
                .and_then(|pos| pair[1].get(pos).mark())
                .is_some_and(|mark| mark == Mark::for_move(prev))
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_full_game() {
        let mut timeline = Timeline::new();
        for m in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            timeline.play(m);
        }
        assert_eq!(timeline.history().len(), 10);
        assert!(AlternatingMarksInvariant::holds(&timeline));
    }
}
