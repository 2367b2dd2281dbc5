use crate::solver::grid::Cell;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A structural defect in a set of cages, detected when the set is built.
///
/// These are all fatal to the solve attempt: a malformed cage partition can
/// never become solvable, so nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CageSetError {
    #[error("cage {index} contains no cells")]
    EmptyCage { index: usize },

    #[error("cage {index} spans {size} cells; at most 9 distinct values fit in one cage")]
    OversizedCage { index: usize, size: usize },

    #[error("cage {index} has target sum 0; targets must be positive")]
    ZeroTarget { index: usize },

    #[error("cage {index} has target {target}, which no set of {size} distinct values 1-9 can reach")]
    UnreachableTarget {
        index: usize,
        size: usize,
        target: u32,
    },

    #[error("cell {cell} appears in more than one cage")]
    Overlap { cell: Cell },

    #[error("cell {cell} is not covered by any cage")]
    Uncovered { cell: Cell },

    #[error("cell ({row}, {col}) lies outside the 9x9 grid")]
    OutOfBounds { row: u8, col: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The supplied cages do not form a valid Killer Sudoku partition.
    #[error("invalid cage set: {0}")]
    InvalidCageSet(#[from] CageSetError),

    /// A pre-filled value conflicts with the row, column, box, or cage
    /// constraints (or is outside 1..=9, or targets an occupied cell).
    #[error("invalid initial state: value {value} cannot be placed at {cell}")]
    InvalidInitialState { cell: Cell, value: u8 },
}
