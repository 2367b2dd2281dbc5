//! Forward checking: after an assignment, narrow the domains of every cell
//! directly related to it and report whether any domain wiped out.
//!
//! This deliberately stops short of arc consistency. Only the peers of the
//! assigned cell are revisited, and the cage arithmetic filter keeps values
//! no single remaining cell could use, without attempting subset-sum
//! closure over the cage as a whole.

use tracing::trace;

use crate::solver::{
    cage::CageSet,
    domain::{CandidateSet, DomainStore},
    grid::{Cell, Grid},
};

/// Pushes the consequences of `cell = value` through the domain store.
///
/// Expects the assignment to already be present in `grid`. Returns `false`
/// on a domain wipe-out, in which case the store is left partially narrowed
/// and the caller restores its snapshot.
pub fn forward_check(
    grid: &Grid,
    cages: &CageSet,
    store: &mut DomainStore,
    cell: Cell,
    value: u8,
) -> bool {
    // Row, column, and box peers lose the assigned value.
    for col in 0..9 {
        let peer = Cell::new(cell.row() as u8, col);
        if peer != cell && grid.is_unassigned(peer) && !store.narrow(peer, value) {
            trace!(%peer, value, "row propagation wiped out a domain");
            return false;
        }
    }
    for row in 0..9 {
        let peer = Cell::new(row, cell.col() as u8);
        if peer != cell && grid.is_unassigned(peer) && !store.narrow(peer, value) {
            trace!(%peer, value, "column propagation wiped out a domain");
            return false;
        }
    }
    let box_row = (cell.row() / 3) * 3;
    let box_col = (cell.col() / 3) * 3;
    for row in box_row..box_row + 3 {
        for col in box_col..box_col + 3 {
            let peer = Cell::new(row as u8, col as u8);
            if peer != cell && grid.is_unassigned(peer) && !store.narrow(peer, value) {
                trace!(%peer, value, "box propagation wiped out a domain");
                return false;
            }
        }
    }

    // Cage: distinctness first, then the sum arithmetic.
    let cage = cages.cage_containing(cell);
    let mut assigned_sum = 0u32;
    let mut empty_cells: Vec<Cell> = Vec::with_capacity(cage.size());
    for &member in cage.cells() {
        match grid.value(member) {
            Some(v) => assigned_sum += u32::from(v),
            None => empty_cells.push(member),
        }
    }
    for &member in &empty_cells {
        if !store.narrow(member, value) {
            trace!(%member, value, "cage distinctness wiped out a domain");
            return false;
        }
    }

    let remaining = cage.target().saturating_sub(assigned_sum);
    match empty_cells.as_slice() {
        // Cage complete; the exact-sum rule was enforced before assignment.
        [] => true,
        [last] => {
            // One cell left: its value is forced to the remaining sum.
            if (1..=9).contains(&remaining) && store.domain(*last).contains(remaining as u8) {
                store.set(*last, CandidateSet::singleton(remaining as u8));
                true
            } else {
                trace!(cell = %last, remaining, "forced cage value is unavailable");
                false
            }
        }
        _ => {
            // Several cells left: no single candidate may exceed what the
            // cage can still absorb.
            for &member in &empty_cells {
                if !store.retain_at_most(member, remaining) {
                    trace!(%member, remaining, "cage sum filter wiped out a domain");
                    return false;
                }
            }
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::cage::Cage;

    fn assign_and_check(
        grid: &mut Grid,
        cages: &CageSet,
        store: &mut DomainStore,
        cell: Cell,
        value: u8,
    ) -> bool {
        grid.assign(cell, value);
        store.fix(cell, value);
        forward_check(grid, cages, store, cell, value)
    }

    fn partition_with(cage: Cage) -> CageSet {
        let mut cages = vec![cage.clone()];
        for index in 0..81 {
            let cell = Cell::from_index(index);
            if !cage.cells().contains(&cell) {
                cages.push(Cage::new(vec![cell], 9));
            }
        }
        CageSet::new(cages).unwrap()
    }

    #[test]
    fn peers_lose_the_assigned_value() {
        let cage = Cage::new(vec![Cell::new(0, 0), Cell::new(0, 1)], 10);
        let cages = partition_with(cage);
        let mut grid = Grid::empty();
        let mut store = DomainStore::new();

        assert!(assign_and_check(
            &mut grid, &cages, &mut store, Cell::new(0, 0), 4
        ));

        assert!(!store.domain(Cell::new(0, 8)).contains(4), "row peer");
        assert!(!store.domain(Cell::new(8, 0)).contains(4), "column peer");
        assert!(!store.domain(Cell::new(2, 2)).contains(4), "box peer");
        assert!(store.domain(Cell::new(5, 5)).contains(4), "unrelated cell");
    }

    #[test]
    fn last_empty_cage_cell_collapses_to_the_remaining_sum() {
        let cage = Cage::new(vec![Cell::new(0, 0), Cell::new(2, 4)], 11);
        let cages = partition_with(cage);
        let mut grid = Grid::empty();
        let mut store = DomainStore::new();

        assert!(assign_and_check(
            &mut grid, &cages, &mut store, Cell::new(0, 0), 4
        ));
        assert_eq!(
            store.domain(Cell::new(2, 4)),
            CandidateSet::singleton(7),
            "11 - 4 leaves exactly 7"
        );
    }

    #[test]
    fn unreachable_remaining_sum_fails_propagation() {
        let cage = Cage::new(vec![Cell::new(0, 0), Cell::new(2, 4)], 14);
        let cages = partition_with(cage);
        let mut grid = Grid::empty();
        let mut store = DomainStore::new();

        // 14 - 2 = 12 is no value of a single cell.
        assert!(!assign_and_check(
            &mut grid, &cages, &mut store, Cell::new(0, 0), 2
        ));
    }

    #[test]
    fn multi_cell_cages_are_clamped_to_the_remaining_sum() {
        let cage = Cage::new(
            vec![Cell::new(0, 0), Cell::new(2, 3), Cell::new(4, 6)],
            9,
        );
        let cages = partition_with(cage);
        let mut grid = Grid::empty();
        let mut store = DomainStore::new();

        assert!(assign_and_check(
            &mut grid, &cages, &mut store, Cell::new(0, 0), 3
        ));

        // 9 - 3 leaves 6 for the two remaining cells.
        let expected: Vec<u8> = vec![1, 2, 4, 5, 6];
        assert_eq!(
            store.domain(Cell::new(2, 3)).iter().collect::<Vec<_>>(),
            expected,
            "clamped to <= 6 and 3 removed for distinctness"
        );
        assert_eq!(
            store.domain(Cell::new(4, 6)).iter().collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn cage_mates_outside_shared_houses_still_lose_the_value() {
        let cage = Cage::new(
            vec![Cell::new(2, 2), Cell::new(2, 3), Cell::new(3, 3)],
            20,
        );
        let cages = partition_with(cage);
        let mut grid = Grid::empty();
        let mut store = DomainStore::new();

        assert!(assign_and_check(
            &mut grid, &cages, &mut store, Cell::new(2, 2), 8
        ));
        // (3, 3) shares no row, column, or box with (2, 2); only the cage
        // relation removes the 8.
        assert!(!store.domain(Cell::new(3, 3)).contains(8));
    }

    #[test]
    fn wipe_out_reports_failure() {
        let cage = Cage::new(vec![Cell::new(0, 0), Cell::new(1, 1)], 3);
        let cages = partition_with(cage);
        let mut grid = Grid::empty();
        let mut store = DomainStore::new();

        // Leave (0, 1) with nothing but a 2, then assign 2 next to it.
        store.set(Cell::new(0, 1), CandidateSet::singleton(2));
        grid.assign(Cell::new(0, 0), 2);
        store.fix(Cell::new(0, 0), 2);
        assert!(!forward_check(&grid, &cages, &mut store, Cell::new(0, 0), 2));
    }
}
