use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions and mine count consumed by the engine.
///
/// A `GameConfig` obtained through [`GameConfig::new`] always satisfies
/// `width, height >= 1` and `mines < width * height`, which is what keeps mine
/// generation from looping forever.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (30, 16);
    pub const DEFAULT_MINES: CellCount = 99;

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    /// Checks the invariants that [`GameConfig::new`] guarantees.
    pub fn validate(self) -> Result<Self> {
        let (size_x, size_y) = self.size;
        if size_x == 0 || size_y == 0 {
            return Err(GameError::InvalidSize);
        }

        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(GameError::TooManyMines {
                requested: self.mines,
                cells,
            });
        }

        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub const fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_MINES)
    }
}
