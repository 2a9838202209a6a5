use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Too many mines ({mines}) for grid size {grid_size}x{grid_size}")]
    TooManyMines { grid_size: usize, mines: usize },
    #[error("Grid size {0} exceeds the addressable range")]
    GridTooLarge(usize),
    #[error("Difficulty index {index} is out of range (available: {available})")]
    InvalidDifficulty { index: usize, available: usize },
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("Mine at {0:?} lies outside the field")]
    MineOutOfBounds(Position),
    #[error("Mine at {0:?} is listed more than once")]
    DuplicateMine(Position),
    #[error("Difficulty catalog must contain at least one preset")]
    EmptyCatalog,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
}

pub type Result<T> = std::result::Result<T, GameError>;
