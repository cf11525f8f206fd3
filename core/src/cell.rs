use serde::{Deserialize, Serialize};

/// Player-visible state of one cell, as stored by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Closed,
    Flagged,
    /// Opened safe cell with its adjacent mine count.
    Open(u8),
    /// Opened mine, the one that ended the game.
    Detonated,
}

impl CellState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_) | Self::Detonated)
    }

    pub const fn is_closed(self) -> bool {
        !self.is_open()
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    /// Adjacent mine count, only known once the cell is open.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Open(count) => Some(count),
            _ => None,
        }
    }
}
