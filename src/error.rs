use std::path::PathBuf;

/// Errors raised when placing a piece.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (0..=6)")]
    InvalidColumn { column: usize },

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by move selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no valid move: the board is full")]
    NoValidMove,

    #[error("invalid difficulty {0} (expected 1..=5)")]
    InvalidDifficulty(u8),
}

/// Errors raised when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row}: expected 7 cells, found {found}")]
    ColumnCount { row: usize, found: usize },

    #[error("row {row}, column {col}: unexpected character {ch:?}")]
    BadCell { row: usize, col: usize, ch: char },

    #[error("piece at row {row}, column {col} has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },
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
