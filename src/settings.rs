//! Presentation settings kept outside the game engine.

use serde::{Deserialize, Serialize};
use tictactoe_engine::MoveEntry;
use tracing::instrument;

/// Order in which the move list is shown.
///
/// Defaults to [`MoveOrder::Ascending`], game start first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start at the top.
    #[default]
    Ascending,
    /// Latest move at the top.
    Descending,
}

impl MoveOrder {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Reorders an ascending move list for display.
    pub fn apply(self, mut entries: Vec<MoveEntry>) -> Vec<MoveEntry> {
        if self == Self::Descending {
            entries.reverse();
        }
        entries
    }
}

/// User-configurable presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Initial move-list order.
    pub move_order: MoveOrder,
    /// Whether cells of a winning line are highlighted.
    pub highlight_winning_line: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::default(),
            highlight_winning_line: true,
        }
    }
}
