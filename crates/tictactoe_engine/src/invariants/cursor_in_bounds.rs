//! Viewed move always indexes into history.

use super::super::Timeline;
use super::Invariant;

/// Invariant: `0 <= current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<Timeline> for CursorInBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.current_move() < timeline.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes into history"
    }
}
