use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress, on the first reveal
/// - InProgress -> Won, once every safe cell is open
/// - InProgress -> Lost, when a mine is revealed
/// - any -> NotStarted, on reset
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No mines placed yet, waiting for the first reveal
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Indicates the game has ended and no moves are accepted until reset
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Owns one game from the first click to the end, and every game after a reset.
///
/// Out-of-range coordinates and moves after the game has ended are ignored and
/// reported as `NoChange`; only configuration can fail.
#[derive(Clone, Debug)]
pub struct BoardEngine<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    mine_layout: MineLayout,
    board: Array2<CellState>,
    open_count: CellCount,
    flag_count: CellCount,
    state: GameState,
}

impl BoardEngine<RandomMineGenerator> {
    /// Engine with uniformly random mines drawn from a seeded `SmallRng`.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMineGenerator::from_seed(seed))
    }
}

impl<G> BoardEngine<G> {
    pub fn new(config: GameConfig, generator: G) -> Result<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            generator,
            mine_layout: MineLayout::empty(config.size),
            board: Array2::default(config.size.to_nd_index()),
            open_count: 0,
            flag_count: 0,
            state: GameState::NotStarted,
        })
    }

    /// Starts over on a board of a new shape.
    ///
    /// An invalid configuration is rejected and leaves the current game untouched.
    pub fn reset(&mut self, size: Coord2, mines: CellCount) -> Result<()> {
        let config = GameConfig::new(size, mines)?;
        self.reinit(config);
        Ok(())
    }

    /// Starts over with the current configuration.
    pub fn restart(&mut self) {
        self.reinit(self.config);
    }

    fn reinit(&mut self, config: GameConfig) {
        log::debug!(
            "New game: {}x{} with {} mines",
            config.size.0,
            config.size.1,
            config.mines
        );
        self.config = config;
        self.mine_layout = MineLayout::empty(config.size);
        self.board = Array2::default(config.size.to_nd_index());
        self.open_count = 0;
        self.flag_count = 0;
        self.state = GameState::NotStarted;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flag_count
    }

    /// Remaining flag budget.
    pub fn flags_left(&self) -> CellCount {
        self.config.mines - self.flag_count
    }

    pub fn open_count(&self) -> CellCount {
        self.open_count
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<CellState> {
        self.config
            .contains(coords)
            .then(|| self.board[coords.to_nd_index()])
    }

    pub fn is_open(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_some_and(CellState::is_open)
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_some_and(CellState::is_flagged)
    }

    /// Mines are unknown (and absent) before the first reveal.
    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.mine_layout.contains_mine(coords)
    }

    /// Adjacent mine count of any cell, open or not, once mines are placed.
    pub fn adjacent_mines(&self, coords: Coord2) -> Option<u8> {
        (!self.state.is_initial() && self.config.contains(coords))
            .then(|| self.mine_layout.adjacent_mine_count(coords))
    }

    pub fn mine_layout(&self) -> Option<&MineLayout> {
        (!self.state.is_initial()).then_some(&self.mine_layout)
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(self)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use CellState::*;
        use MarkOutcome::*;

        if !self.config.contains(coords) {
            log::debug!("Flag outside the board ignored: {:?}", coords);
            return NoChange;
        }
        if self.state.is_finished() {
            return NoChange;
        }

        match self.board[coords.to_nd_index()] {
            Closed if self.flag_count >= self.config.mines => {
                log::debug!("No flags left for {:?}", coords);
                NoChange
            }
            Closed => {
                self.board[coords.to_nd_index()] = Flagged;
                self.flag_count += 1;
                log::debug!("Flag {:?}, {} placed", coords, self.flag_count);
                Changed
            }
            Flagged => {
                self.board[coords.to_nd_index()] = Closed;
                self.flag_count -= 1;
                log::debug!("Unflag {:?}, {} placed", coords, self.flag_count);
                Changed
            }
            Open(_) | Detonated => NoChange,
        }
    }

    /// Clears a flag on a cell that is about to be opened.
    fn drop_flag(&mut self, coords: Coord2) {
        if self.board[coords.to_nd_index()] == CellState::Flagged {
            self.flag_count -= 1;
            log::debug!("Flag on {:?} removed by opening it", coords);
        }
    }

    fn open_single_cell(&mut self, coords: Coord2) -> u8 {
        self.drop_flag(coords);
        let count = self.mine_layout.adjacent_mine_count(coords);
        self.board[coords.to_nd_index()] = CellState::Open(count);
        self.open_count += 1;
        count
    }

    /// Opens `start` and, if it has no adjacent mines, the whole zero region
    /// around it plus its numbered border.
    ///
    /// Cells are opened as they are pushed, so the open state doubles as the
    /// visited set and the stack never holds more than one entry per cell.
    /// Neighbors of a zero cell are never mines.
    fn flood_open(&mut self, start: Coord2) {
        if self.open_single_cell(start) != 0 {
            return;
        }

        let mut to_visit = Vec::from([start]);
        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.mine_layout.iter_neighbors(visit_coords) {
                if self.board[pos.to_nd_index()].is_open() {
                    continue;
                }

                let count = self.open_single_cell(pos);
                log::trace!("Flood opened {:?}, mine count: {}", pos, count);
                if count == 0 {
                    to_visit.push(pos);
                }
            }
        }
    }
}

impl<G: MineGenerator> BoardEngine<G> {
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if !self.config.contains(coords) {
            log::debug!("Reveal outside the board ignored: {:?}", coords);
            return NoChange;
        }
        if self.state.is_finished() || self.board[coords.to_nd_index()].is_open() {
            return NoChange;
        }

        if self.state.is_initial() {
            self.mine_layout = self.generator.generate(self.config, coords);
            self.state = GameState::InProgress;
            log::debug!("Game started at {:?}", coords);
        }

        if self.mine_layout.contains_mine(coords) {
            self.drop_flag(coords);
            self.board[coords.to_nd_index()] = CellState::Detonated;
            self.state = GameState::Lost;
            log::debug!("Mine hit at {:?}", coords);
            return HitMine;
        }

        self.flood_open(coords);
        log::debug!(
            "Revealed {:?}, {} of {} safe cells open",
            coords,
            self.open_count,
            self.mine_layout.safe_cell_count()
        );

        if self.open_count == self.mine_layout.safe_cell_count() {
            self.state = GameState::Won;
            log::debug!("All safe cells open");
            Won
        } else {
            Revealed
        }
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Reveal(coords) => CommandOutcome::Reveal(self.reveal(coords)),
            Command::ToggleFlag(coords) => CommandOutcome::Mark(self.toggle_flag(coords)),
            Command::Restart => {
                self.restart();
                CommandOutcome::Restarted
            }
            Command::Quit => CommandOutcome::Quit,
        }
    }
}
