use std::path::PathBuf;

use crate::game::COLS;

/// Errors returned when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {} is full", .column + 1)]
    IllegalMove { column: usize },

    #[error("column {} is out of range (1..={})", .column + 1, COLS)]
    ColumnOutOfRange { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by the line-mode prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// A move was requested although the board has no legal column left. The
    /// game loop must stop on a draw before asking again.
    #[error("no legal move left; the draw should have ended the game")]
    EmptyMoveSet,

    #[error("input closed before a column was chosen")]
    InputClosed,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
