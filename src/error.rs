use thiserror::Error;

/// Errors raised at the input boundary.
///
/// The board and solver assume a valid permutation; everything malformed is
/// rejected here before a `Board` ever exists.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("failed to read puzzle input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid integer {0:?} in puzzle input")]
    BadToken(String),

    #[error("puzzle dimension must be at least 2, got {0}")]
    BadDimension(usize),

    #[error("expected {expected} cells for a {dimension}x{dimension} board, found {found}")]
    MissingCells {
        dimension: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell value {value} is out of range for a {dimension}x{dimension} board")]
    ValueOutOfRange { value: u32, dimension: usize },

    #[error("cell value {0} appears more than once")]
    DuplicateValue(u32),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
