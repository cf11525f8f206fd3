use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hidden half of the board: where the mines are and how many touch each cell.
///
/// Adjacent counts are maintained incrementally by [`MineLayout::place_mine`],
/// so they are final as soon as the last mine is placed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    size: Coord2,
    mine_mask: Array2<bool>,
    adjacent: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    /// A layout without any mines, every count zero.
    pub fn empty(size: Coord2) -> Self {
        Self {
            size,
            mine_mask: Array2::default(size.to_nd_index()),
            adjacent: Array2::zeros(size.to_nd_index()),
            mine_count: 0,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut layout = Self::empty(size);

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            layout.place_mine(coords);
        }

        Ok(layout)
    }

    /// Puts a mine at `coords` and bumps the count of every neighbor.
    ///
    /// Returns `false` without touching anything when `coords` is out of bounds or
    /// already holds a mine.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        if !in_bounds(coords, self.size) || self.mine_mask[coords.to_nd_index()] {
            return false;
        }

        self.mine_mask[coords.to_nd_index()] = true;
        self.mine_count += 1;
        for pos in self.iter_neighbors(coords) {
            self.adjacent[pos.to_nd_index()] += 1;
        }
        true
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Whether `coords` holds a mine, `false` outside the board.
    pub fn contains_mine(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size) && self[coords]
    }

    /// Mines in the Moore neighborhood of `coords`, `0` outside the board.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        if in_bounds(coords, self.size) {
            self.adjacent[coords.to_nd_index()]
        } else {
            0
        }
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size).filter(move |&coords| self[coords])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::around(coords, self.size)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_placement() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 7);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 0);
        // the mine cell itself is not counted
        assert_eq!(layout.adjacent_mine_count((0, 0)), 0);
    }

    #[test]
    fn duplicate_placement_is_ignored() {
        let mut layout = MineLayout::empty((2, 2));

        assert!(layout.place_mine((1, 1)));
        assert!(!layout.place_mine((1, 1)));
        assert!(!layout.place_mine((2, 0)));

        assert_eq!(layout.mine_count(), 1);
        assert_eq!(layout.adjacent_mine_count((0, 0)), 1);
    }

    #[test]
    fn out_of_bounds_coords_are_rejected() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(0, 2)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn queries_outside_board_are_safe() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(1, 1)]).unwrap();

        assert!(!layout.contains_mine((5, 5)));
        assert_eq!(layout.adjacent_mine_count((5, 5)), 0);
        assert_eq!(layout.iter_mines().next(), Some((1, 1)));
        assert_eq!(layout.game_config(), GameConfig::new_unchecked((2, 2), 1));
    }
}
