//! Cages: the sum regions that distinguish Killer Sudoku from the classic
//! game, and the validated partition of the grid into them.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CageSetError, Result},
    solver::grid::Cell,
};

/// A group of cells whose values must be mutually distinct and sum to
/// `target`. Cell order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cage {
    cells: Vec<Cell>,
    target: u32,
}

impl Cage {
    pub fn new(cells: Vec<Cell>, target: u32) -> Self {
        Self { cells, target }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }
}

/// An immutable, validated partition of the 81 cells into cages.
///
/// Construction performs the eager structural checks: cages must be pairwise
/// disjoint, cover the whole grid, stay within 1..=9 cells, and carry a
/// positive target. Single-cell cages must name a value 1..=9 outright.
/// Targets that are merely unreachable through *search* (say, a two-cell
/// cage asking for 19) are deliberately left to the solver, which reports
/// them as unsolvable rather than malformed.
#[derive(Debug, Clone)]
pub struct CageSet {
    cages: Vec<Cage>,
    cage_of: [usize; 81],
}

impl CageSet {
    pub fn new(cages: Vec<Cage>) -> Result<Self> {
        const UNCOVERED: usize = usize::MAX;
        let mut cage_of = [UNCOVERED; 81];

        for (index, cage) in cages.iter().enumerate() {
            if cage.cells.is_empty() {
                return Err(CageSetError::EmptyCage { index }.into());
            }
            if cage.size() > 9 {
                return Err(CageSetError::OversizedCage {
                    index,
                    size: cage.size(),
                }
                .into());
            }
            if cage.target == 0 {
                return Err(CageSetError::ZeroTarget { index }.into());
            }
            if cage.size() == 1 && !(1..=9).contains(&cage.target) {
                return Err(CageSetError::UnreachableTarget {
                    index,
                    size: 1,
                    target: cage.target,
                }
                .into());
            }
            for &cell in &cage.cells {
                if !cell.in_bounds() {
                    return Err(CageSetError::OutOfBounds {
                        row: cell.row() as u8,
                        col: cell.col() as u8,
                    }
                    .into());
                }
                if cage_of[cell.index()] != UNCOVERED {
                    return Err(CageSetError::Overlap { cell }.into());
                }
                cage_of[cell.index()] = index;
            }
        }

        if let Some(index) = cage_of.iter().position(|&owner| owner == UNCOVERED) {
            return Err(CageSetError::Uncovered {
                cell: Cell::from_index(index),
            }
            .into());
        }

        Ok(Self { cages, cage_of })
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    pub fn len(&self) -> usize {
        self.cages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cages.is_empty()
    }

    /// The cage that owns `cell`. Every cell has one; the partition is total.
    pub fn cage_containing(&self, cell: Cell) -> &Cage {
        &self.cages[self.cage_of[cell.index()]]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{error::Error, solver::fixtures};

    fn singleton_partition() -> Vec<Cage> {
        (0..81)
            .map(|index| Cage::new(vec![Cell::from_index(index)], 1 + (index as u32 % 9)))
            .collect()
    }

    #[test]
    fn reference_layout_is_accepted() {
        let set = CageSet::new(fixtures::reference_cages()).unwrap();
        assert_eq!(set.len(), 29);
        assert_eq!(set.cage_containing(Cell::new(0, 0)).target(), 3);
        assert_eq!(set.cage_containing(Cell::new(0, 1)).target(), 3);
    }

    #[test]
    fn single_cell_cage_with_impossible_target_is_rejected() {
        let mut cages = singleton_partition();
        cages[0] = Cage::new(vec![Cell::new(0, 0)], 10);

        let err = CageSet::new(cages).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCageSet(CageSetError::UnreachableTarget {
                index: 0,
                size: 1,
                target: 10,
            })
        );
    }

    #[test]
    fn overlapping_cages_are_rejected() {
        let mut cages = singleton_partition();
        // (0, 1) now appears both in cage 0 and in its own singleton cage.
        cages[0] = Cage::new(vec![Cell::new(0, 0), Cell::new(0, 1)], 4);

        let err = CageSet::new(cages).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCageSet(CageSetError::Overlap {
                cell: Cell::new(0, 1)
            })
        );
    }

    #[test]
    fn incomplete_coverage_is_rejected() {
        let mut cages = singleton_partition();
        cages.pop();

        let err = CageSet::new(cages).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCageSet(CageSetError::Uncovered {
                cell: Cell::new(8, 8)
            })
        );
    }

    #[test]
    fn oversized_and_empty_cages_are_rejected() {
        let ten_cells: Vec<Cell> = (0..10).map(Cell::from_index).collect();
        let err = CageSet::new(vec![Cage::new(ten_cells, 45)]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCageSet(CageSetError::OversizedCage { size: 10, .. })
        ));

        let err = CageSet::new(vec![Cage::new(vec![], 5)]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCageSet(CageSetError::EmptyCage { index: 0 })
        ));
    }

    #[test]
    fn zero_target_is_rejected() {
        let mut cages = singleton_partition();
        cages[3] = Cage::new(vec![Cell::from_index(3)], 0);

        let err = CageSet::new(cages).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCageSet(CageSetError::ZeroTarget { index: 3 })
        );
    }

    #[test]
    fn cage_lookup_finds_the_owning_cage() {
        let set = CageSet::new(fixtures::reference_cages()).unwrap();
        for cage in set.cages() {
            for &cell in cage.cells() {
                assert_eq!(set.cage_containing(cell), cage);
            }
        }
    }
}
