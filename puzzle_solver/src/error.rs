//! Error types for board construction, text input and bounded searches.

use thiserror::Error;

/// Raised when a grid is not a permutation of `0..n²` laid out as `n` rows of `n` cells.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    /// Boards must be at least 2x2.
    #[error("Board dimension must be at least 2, found {0}")]
    DimensionTooSmall(usize),

    /// The grid does not have `dimension` rows (or flat input is not `dimension²` long).
    #[error("Expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },

    /// A row has a different length than the number of rows.
    #[error("Row {row} has {found} cells (expected {expected})")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A label outside `0..n²`.
    #[error("Tile {label} at ({row}, {col}) is out of range (max {max})")]
    LabelOutOfRange {
        label: u32,
        row: usize,
        col: usize,
        max: u32,
    },

    /// A label that appears more than once.
    #[error("Tile {label} appears more than once (again at ({row}, {col}))")]
    DuplicateLabel { label: u32, row: usize, col: usize },
}

/// Errors produced while reading a board from its text form.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Input is empty")]
    Empty,

    #[error("Invalid number '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },

    #[error("Expected {expected} tiles, found {found}")]
    MissingTiles { expected: usize, found: usize },

    #[error("Unexpected {0} trailing token(s) after the last tile")]
    TrailingTokens(usize),

    #[error(transparent)]
    InvalidBoard(#[from] InvalidBoardError),

    #[error("Failed to read board file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by a bounded search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The expansion budget ran out before either search reached a goal.
    #[error("Search budget exhausted after expanding {expanded} nodes")]
    BudgetExhausted { expanded: usize },
}
