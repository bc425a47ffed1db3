use std::path::PathBuf;

/// Errors raised when placing a piece on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("game is already over")]
    GameOver,
}

/// Errors an agent can surface while choosing a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no legal move available: board is full")]
    NoLegalMove,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while playing a game between two agents.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("agent '{agent}' selected illegal column {column}: {source}")]
    IllegalMove {
        agent: String,
        column: usize,
        source: MoveError,
    },

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),
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

/// Errors raised when parsing a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("row {row} has {len} cells, expected {expected}")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown glyph '{glyph}' at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("piece at row {row}, column {col} is floating above an empty cell")]
    Floating { row: usize, col: usize },
}
