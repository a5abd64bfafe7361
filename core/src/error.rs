use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must have at least one row and one column")]
    InvalidSize,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Game has not started, reveal a cell first")]
    NotStarted,
}

pub type Result<T> = std::result::Result<T, GameError>;
