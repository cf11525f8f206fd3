use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord2,
    pub state: GameState,
    pub mines: CellCount,
    pub flags_placed: CellCount,
    pub cells: Array2<CellState>,
}

impl BoardView {
    pub fn from_engine<G>(engine: &BoardEngine<G>) -> Self {
        let size = engine.size();
        let mut cells: Array2<CellState> = Array2::default(size.to_nd_index());
        for coords in iter_coords(size) {
            if let Some(cell) = engine.cell_at(coords) {
                cells[coords.to_nd_index()] = cell;
            }
        }

        Self {
            size,
            state: engine.state(),
            mines: engine.total_mines(),
            flags_placed: engine.flags_placed(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<CellState> {
        in_bounds(coords, self.size).then(|| self.cells[coords.to_nd_index()])
    }

    pub fn flags_left(&self) -> CellCount {
        self.mines.saturating_sub(self.flags_placed)
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }
}
