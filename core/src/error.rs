use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Mines were already placed on this board")]
    MinesAlreadyPlaced,
}

pub type Result<T> = core::result::Result<T, GameError>;
