use thiserror::Error;

use crate::{CellCount, Coord, MAX_DIMENSION};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "Board size must be between 1 * 1 and {max} * {max}, got {height} * {width}",
        max = MAX_DIMENSION
    )]
    InvalidSize { height: Coord, width: Coord },
    #[error("Too many mines, requested {mines} but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
