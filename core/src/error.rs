use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Expected {expected} pieces to fill the board, got {actual}")]
    InvalidPieceCount { expected: usize, actual: usize },
    #[error("No system randomness available to deal a new game")]
    EntropyUnavailable,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
