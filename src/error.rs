//! Centralized error types for the game.

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),

    #[error("Ragged board: row {row} has {len} columns, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("Board is empty")]
    EmptyBoard,
}

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Board parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
