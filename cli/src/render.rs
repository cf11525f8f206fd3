use std::fmt::Write as _;
use sweeper_core::{BoardView, CellState, GameState};

pub(crate) fn cell_char(cell: CellState) -> char {
    match cell {
        CellState::Closed => '.',
        CellState::Flagged => 'F',
        CellState::Open(0) => ' ',
        CellState::Open(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellState::Detonated => '*',
    }
}

fn status(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "reveal a cell to start",
        GameState::InProgress => "in progress",
        GameState::Won => "GAME CLEAR",
        GameState::Lost => "GAME OVER",
    }
}

/// Text frame of the board: column header, one line per row, status footer.
pub(crate) fn board(view: &BoardView) -> String {
    let (size_x, size_y) = view.size;
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..size_x {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');

    for y in 0..size_y {
        let _ = write!(out, "{:>3}", y);
        for x in 0..size_x {
            let cell = view.cell((x, y)).unwrap_or_default();
            let _ = write!(out, "{:>3}", cell_char(cell));
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "flags {}/{}  {}",
        view.flags_placed,
        view.mines,
        status(view.state)
    );
    out
}
