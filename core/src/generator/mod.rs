use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts, invoked once per game on the first reveal.
///
/// Implementations must never put a mine on `exclude`, that cell is the first
/// click.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig, exclude: Coord2) -> MineLayout;
}

impl<G: MineGenerator + ?Sized> MineGenerator for &mut G {
    fn generate(&mut self, config: GameConfig, exclude: Coord2) -> MineLayout {
        (**self).generate(config, exclude)
    }
}
