//! Error types for board construction and solver input validation.

use thiserror::Error;

/// A board, or a pair of boards handed to the solver, is malformed.
///
/// Returned before any search starts. An unsolvable but well-formed puzzle
/// is not an error; see [`crate::solver::SolveOutcome::Unsolvable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidInput {
    #[error("dimension mismatch: initial is {}x{}, goal is {}x{}", initial.0, initial.1, goal.0, goal.1)]
    DimensionMismatch {
        initial: (usize, usize),
        goal: (usize, usize),
    },

    #[error("initial and goal boards do not contain the same tiles")]
    TileMismatch,

    #[error("expected exactly one blank cell, found {found}")]
    BlankCount { found: usize },

    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },

    #[error("board has {cells} cells, need at least 2")]
    TooSmall { cells: usize },

    #[error("board has {cells} cells, at most 255 are supported")]
    TooLarge { cells: usize },

    #[error("invalid tile '{token}'")]
    BadToken { token: String },
}
