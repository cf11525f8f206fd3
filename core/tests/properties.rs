//! Randomized checks of the board invariants.

use proptest::prelude::*;
use sweeper_core::{
    BoardEngine, CellCount, CellState, Coord2, GameConfig, GameError, GameState, MarkOutcome,
    MineLayout, Neighbors, RevealOutcome, iter_coords,
};

/// Board size, a valid mine count, an RNG seed and a first click on the board.
fn board_params() -> impl Strategy<Value = (Coord2, CellCount, u64, Coord2)> {
    (1u8..=12, 1u8..=12).prop_flat_map(|(w, h)| {
        let cells = CellCount::from(w) * CellCount::from(h);
        (Just((w, h)), 0..cells, any::<u64>(), (0..w, 0..h))
    })
}

fn started(size: Coord2, mines: CellCount, seed: u64, click: Coord2) -> BoardEngine {
    let mut engine = BoardEngine::seeded(GameConfig::new(size, mines).unwrap(), seed).unwrap();
    engine.reveal(click);
    engine
}

fn recount(layout: &MineLayout, coords: Coord2) -> u8 {
    let (x, y) = (i16::from(coords.0), i16::from(coords.1));
    let (w, h) = layout.size();
    let mut count = 0;
    for dx in -1..=1i16 {
        for dy in -1..=1i16 {
            let (nx, ny) = (x + dx, y + dy);
            if (dx, dy) == (0, 0) || nx < 0 || ny < 0 || nx >= w.into() || ny >= h.into() {
                continue;
            }
            if layout.contains_mine((nx as u8, ny as u8)) {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn new_board_is_blank((size, mines, seed, _click) in board_params()) {
        let engine = BoardEngine::seeded(GameConfig::new(size, mines).unwrap(), seed).unwrap();

        prop_assert_eq!(engine.state(), GameState::NotStarted);
        prop_assert_eq!(engine.flags_placed(), 0);
        for coords in iter_coords(size) {
            prop_assert_eq!(engine.cell_at(coords), Some(CellState::Closed));
        }
    }

    #[test]
    fn first_reveal_is_safe_and_counts_are_exact((size, mines, seed, click) in board_params()) {
        let engine = started(size, mines, seed, click);
        let layout = engine.mine_layout().unwrap();

        prop_assert!(!layout.contains_mine(click));
        prop_assert_ne!(engine.state(), GameState::Lost);
        prop_assert_eq!(layout.mine_count(), mines);
        prop_assert_eq!(layout.iter_mines().count(), usize::from(mines));
        for coords in iter_coords(size) {
            prop_assert_eq!(layout.adjacent_mine_count(coords), recount(layout, coords));
        }
    }

    #[test]
    fn revealing_an_open_cell_changes_nothing((size, mines, seed, click) in board_params()) {
        let mut engine = started(size, mines, seed, click);
        let before = engine.view();

        prop_assert_eq!(engine.reveal(click), RevealOutcome::NoChange);
        prop_assert_eq!(engine.view(), before);
    }

    #[test]
    fn flood_fill_region_is_closed_under_zero_neighbors((size, mines, seed, click) in board_params()) {
        let engine = started(size, mines, seed, click);

        for coords in iter_coords(size) {
            match engine.cell_at(coords).unwrap() {
                CellState::Open(0) => {
                    for pos in Neighbors::around(coords, size) {
                        prop_assert!(engine.is_open(pos));
                    }
                }
                CellState::Open(_) if coords != click => {
                    // numbered cells only open as the border of a zero cell
                    prop_assert!(Neighbors::around(coords, size)
                        .any(|pos| engine.cell_at(pos) == Some(CellState::Open(0))));
                }
                CellState::Detonated => prop_assert!(false, "cascade opened a mine"),
                _ => {}
            }
        }
    }

    #[test]
    fn flag_counter_stays_within_budget(
        (size, mines, seed, _click) in board_params(),
        toggles in proptest::collection::vec((0u8..12, 0u8..12), 0..64),
    ) {
        let mut engine = BoardEngine::seeded(GameConfig::new(size, mines).unwrap(), seed).unwrap();

        for coords in toggles {
            engine.toggle_flag(coords);
            prop_assert!(engine.flags_placed() <= mines);
            let flagged = iter_coords(size).filter(|&pos| engine.is_flagged(pos)).count();
            prop_assert_eq!(flagged, usize::from(engine.flags_placed()));
        }
    }

    #[test]
    fn double_toggle_restores_flag_state((size, mines, seed, click) in board_params()) {
        prop_assume!(mines > 0);
        let mut engine = BoardEngine::seeded(GameConfig::new(size, mines).unwrap(), seed).unwrap();
        let before = engine.view();

        prop_assert_eq!(engine.toggle_flag(click), MarkOutcome::Changed);
        prop_assert_eq!(engine.flags_placed(), 1);
        prop_assert_eq!(engine.toggle_flag(click), MarkOutcome::Changed);
        prop_assert_eq!(engine.view(), before);
    }

    #[test]
    fn won_exactly_when_all_safe_cells_open((size, mines, seed, click) in board_params()) {
        let mut engine = started(size, mines, seed, click);
        let layout = engine.mine_layout().cloned().unwrap();
        let safe = engine.config().safe_cells();

        for coords in iter_coords(size).filter(|&pos| !layout.contains_mine(pos)) {
            prop_assert_eq!(engine.state() == GameState::Won, engine.open_count() == safe);
            engine.reveal(coords);
        }

        prop_assert_eq!(engine.state(), GameState::Won);
        prop_assert_eq!(engine.open_count(), safe);
    }

    #[test]
    fn hitting_a_mine_loses_without_cascade((size, mines, seed, click) in board_params()) {
        let mut engine = started(size, mines, seed, click);
        prop_assume!(engine.state() == GameState::InProgress);
        let mine = engine.mine_layout().unwrap().iter_mines().next().unwrap();
        let opened = engine.open_count();

        prop_assert_eq!(engine.reveal(mine), RevealOutcome::HitMine);
        prop_assert_eq!(engine.state(), GameState::Lost);
        prop_assert_eq!(engine.open_count(), opened);
        prop_assert_eq!(engine.view().open_count(), usize::from(opened) + 1);
    }

    #[test]
    fn full_boards_are_rejected(w in 1u8..=20, h in 1u8..=20) {
        let cells = CellCount::from(w) * CellCount::from(h);
        let is_too_many = matches!(
            GameConfig::new((w, h), cells),
            Err(GameError::TooManyMines { .. })
        );
        prop_assert!(is_too_many);
    }
}
