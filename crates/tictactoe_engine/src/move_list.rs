//! Move-list entries derived from history.

use super::Position;
use serde::{Deserialize, Serialize};

/// One row of the move list.
///
/// `Display` renders the label the player sees. Entries that are not the
/// current move are actionable and jump to [`MoveEntry::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry refers to.
    pub index: usize,
    /// Cell filled by this move; `None` for game start.
    pub position: Option<Position>,
    /// Whether this is the board being viewed.
    pub is_current: bool,
}

impl MoveEntry {
    /// Whether selecting this entry should trigger a jump.
    pub fn is_actionable(&self) -> bool {
        !self.is_current
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = if self.is_current { "You are at" } else { "Go to" };
        if self.index == 0 {
            return write!(f, "{} game start", prefix);
        }
        write!(f, "{} move #{}", prefix, self.index)?;
        if let Some(pos) = self.position {
            write!(f, " ({}, {})", pos.row(), pos.col())?;
        }
        Ok(())
    }
}
