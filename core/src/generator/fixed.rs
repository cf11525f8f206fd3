use alloc::vec::Vec;

use super::*;

/// Places mines on preset coordinates, for reproducible boards.
///
/// Coordinates outside the board and the first click are skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }

    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(&mut self, config: GameConfig, exclude: Coord2) -> MineLayout {
        let mut layout = MineLayout::empty(config.size);

        for &coords in &self.mines {
            if coords == exclude {
                log::warn!("Preset mine at {:?} skipped, it is the first click", coords);
                continue;
            }
            if !config.contains(coords) {
                log::warn!("Preset mine at {:?} is outside the board", coords);
                continue;
            }
            layout.place_mine(coords);
        }

        if layout.mine_count() != config.mines {
            log::warn!(
                "Preset minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        layout
    }
}
