use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board width and height must be at least 1")]
    InvalidSize,
    #[error("Too many mines, requested {requested} but the board only has {cells} cells")]
    TooManyMines { requested: CellCount, cells: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
