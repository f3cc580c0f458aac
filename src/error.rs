use std::path::PathBuf;

/// Reasons a move is refused. Refusals are ordinary user input, not faults:
/// the session that produced one is still valid and unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("target {target} is off the board (limit {limit})")]
    OutOfBounds { target: usize, limit: usize },

    #[error("game is already won")]
    GameOver,
}

/// Errors raised by history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("history index {index} out of range (length {len})")]
    OutOfRange { index: usize, len: usize },
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
