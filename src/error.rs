use std::path::PathBuf;

/// Errors produced by the board and the game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board must be at least 4x4 (got {height}x{width})")]
    InvalidDimension { height: usize, width: usize },

    #[error("index {index} is out of range (must be < {limit})")]
    OutOfRange { index: usize, limit: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameAlreadyOver,

    #[error("illegal write to cell ({row}, {column})")]
    IllegalWrite { row: usize, column: usize },
}

impl GameError {
    /// True for contract violations that indicate a bug in the caller rather
    /// than a rejected move.
    pub fn is_fault(&self) -> bool {
        matches!(self, GameError::IllegalWrite { .. })
    }
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
