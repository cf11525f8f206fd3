use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Uniform rejection sampling: draw random cells until enough distinct mines are
/// placed, skipping the first click and cells that already hold a mine.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R = SmallRng> {
    rng: R,
}

impl RandomMineGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(&mut self, config: GameConfig, exclude: Coord2) -> MineLayout {
        let mut layout = MineLayout::empty(config.size);

        let free_cells = config.total_cells() - CellCount::from(config.contains(exclude));
        let mines = if config.mines > free_cells {
            log::warn!(
                "Minefield cannot fit {} mines next to the first click, placing {}",
                config.mines,
                free_cells
            );
            free_cells
        } else {
            config.mines
        };

        let (size_x, size_y) = config.size;
        let mut draws: u32 = 0;
        while layout.mine_count() < mines {
            let coords = (
                self.rng.random_range(0..size_x),
                self.rng.random_range(0..size_y),
            );
            draws = draws.saturating_add(1);

            if coords == exclude {
                continue;
            }
            layout.place_mine(coords);
        }

        log::debug!(
            "Placed {} mines in {} draws, first click at {:?}",
            layout.mine_count(),
            draws,
            exclude
        );
        layout
    }
}
