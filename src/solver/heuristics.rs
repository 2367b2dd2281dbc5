//! Cell-selection policies for the search engine.
//!
//! Selection is the variable-ordering half of the search configuration:
//! either a static row-major scan, or the fail-first minimum-remaining-values
//! rule, applied to the whole grid or to the cells of a single cage. Ties
//! always break toward the lower flat index so that a given configuration
//! visits the search space in one deterministic order.

use crate::solver::{
    cage::Cage,
    domain::DomainStore,
    grid::{Cell, Grid},
};

/// First unassigned cell in row-major order.
pub fn first_unassigned(grid: &Grid) -> Option<Cell> {
    (0..81).map(Cell::from_index).find(|&c| grid.is_unassigned(c))
}

/// The unassigned cell with the fewest remaining candidates.
///
/// With an untouched store (no propagation) every domain is full, and this
/// degenerates to the row-major scan through the tie-break.
pub fn minimum_remaining(grid: &Grid, store: &DomainStore) -> Option<Cell> {
    (0..81)
        .map(Cell::from_index)
        .filter(|&c| grid.is_unassigned(c))
        .min_by_key(|&c| (store.domain(c).len(), c.index()))
}

/// Minimum-remaining-values restricted to one cage's unassigned cells.
pub fn minimum_remaining_in_cage(grid: &Grid, store: &DomainStore, cage: &Cage) -> Option<Cell> {
    cage.cells()
        .iter()
        .copied()
        .filter(|&c| grid.is_unassigned(c))
        .min_by_key(|&c| (store.domain(c).len(), c.index()))
}
