//! Shared puzzle fixtures for the unit tests.

use crate::solver::{
    cage::{Cage, CageSet},
    domain::CandidateSet,
    grid::{Cell, Grid},
};

/// A known, valid, solved classic Sudoku grid used to derive test puzzles.
pub(crate) const SEED_GRID: [[u8; 9]; 9] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9],
];

/// The 29-cage Killer Sudoku layout the solver family was built around.
pub(crate) fn reference_cages() -> Vec<Cage> {
    let layout: &[(&[(u8, u8)], u32)] = &[
        (&[(0, 0), (0, 1)], 3),
        (&[(0, 2), (0, 3), (0, 4)], 15),
        (&[(0, 5), (1, 5), (1, 4), (2, 4)], 22),
        (&[(0, 6), (1, 6)], 4),
        (&[(0, 7), (1, 7)], 16),
        (&[(0, 8), (1, 8), (2, 8), (3, 8)], 15),
        (&[(1, 0), (1, 1), (2, 0), (2, 1)], 25),
        (&[(1, 2), (1, 3)], 17),
        (&[(2, 2), (2, 3), (3, 3)], 9),
        (&[(2, 5), (3, 5), (4, 5)], 8),
        (&[(2, 6), (2, 7), (3, 6)], 20),
        (&[(3, 0), (4, 0)], 6),
        (&[(3, 1), (3, 2)], 14),
        (&[(3, 4), (4, 4), (5, 4)], 17),
        (&[(3, 7), (4, 7), (4, 6)], 17),
        (&[(4, 1), (4, 2), (5, 1)], 13),
        (&[(4, 3), (5, 3), (6, 3)], 20),
        (&[(4, 8), (5, 8)], 12),
        (&[(5, 0), (6, 0), (7, 0), (8, 0)], 27),
        (&[(5, 2), (6, 2), (6, 1)], 6),
        (&[(5, 5), (6, 5), (6, 6)], 20),
        (&[(5, 6), (5, 7)], 6),
        (&[(6, 4), (7, 4), (7, 3), (8, 3)], 10),
        (&[(6, 7), (6, 8), (7, 7), (7, 8)], 14),
        (&[(7, 1), (8, 1)], 8),
        (&[(7, 2), (8, 2)], 16),
        (&[(7, 5), (7, 6)], 15),
        (&[(8, 4), (8, 5), (8, 6)], 13),
        (&[(8, 7), (8, 8)], 17),
    ];
    layout
        .iter()
        .map(|&(cells, target)| {
            Cage::new(
                cells.iter().map(|&(r, c)| Cell::new(r, c)).collect(),
                target,
            )
        })
        .collect()
}

/// The unique solution of [`reference_cages`].
pub(crate) const REFERENCE_SOLUTION: [[u8; 9]; 9] = [
    [2, 1, 5, 6, 4, 7, 3, 9, 8],
    [3, 6, 8, 9, 5, 2, 1, 7, 4],
    [7, 9, 4, 3, 8, 1, 6, 5, 2],
    [5, 8, 6, 2, 7, 4, 9, 3, 1],
    [1, 4, 2, 5, 9, 3, 8, 6, 7],
    [9, 7, 3, 8, 1, 6, 4, 2, 5],
    [8, 2, 1, 7, 3, 9, 5, 4, 6],
    [6, 5, 9, 4, 2, 8, 7, 1, 3],
    [4, 3, 7, 1, 6, 5, 2, 8, 9],
];

/// Swaps two values everywhere in the grid; relabeling preserves validity.
fn relabel(grid: &mut [[u8; 9]; 9], a: u8, b: u8) {
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            if *cell == a {
                *cell = b;
            } else if *cell == b {
                *cell = a;
            }
        }
    }
}

/// A puzzle whose only freedom is the pair (0,0)/(0,1), forced to {1, 2} by
/// a two-cell cage with target 3. Returns (cages, givens, expected rows).
pub(crate) fn forced_pair_puzzle() -> (Vec<Cage>, Vec<(Cell, u8)>, [[u8; 9]; 9]) {
    let mut solved = SEED_GRID;
    relabel(&mut solved, 5, 1);
    relabel(&mut solved, 3, 2);
    debug_assert_eq!(solved[0][0], 1);
    debug_assert_eq!(solved[0][1], 2);

    let pair = [Cell::new(0, 0), Cell::new(0, 1)];
    let mut cages = vec![Cage::new(pair.to_vec(), 3)];
    let mut givens = Vec::new();
    for index in 2..81 {
        let cell = Cell::from_index(index);
        let value = solved[cell.row()][cell.col()];
        cages.push(Cage::new(vec![cell], u32::from(value)));
        givens.push((cell, value));
    }
    (cages, givens, solved)
}

/// A partition whose two-cell cage carries an out-of-reach target; the rest
/// of the grid is pinned by singleton cages taken from the seed grid.
pub(crate) fn unreachable_pair_cages(target: u32) -> Vec<Cage> {
    let mut cages = vec![Cage::new(vec![Cell::new(0, 0), Cell::new(0, 1)], target)];
    for index in 2..81 {
        let cell = Cell::from_index(index);
        cages.push(Cage::new(
            vec![cell],
            u32::from(SEED_GRID[cell.row()][cell.col()]),
        ));
    }
    cages
}

/// Carves the seed grid into row-wise dominoes (plus one singleton per
/// row), targets taken from the solved values. Returns (cages, solution).
pub(crate) fn domino_puzzle() -> (Vec<Cage>, [[u8; 9]; 9]) {
    let mut cages = Vec::new();
    for row in 0..9u8 {
        for pair in 0..4u8 {
            let left = Cell::new(row, pair * 2);
            let right = Cell::new(row, pair * 2 + 1);
            let target = u32::from(SEED_GRID[left.row()][left.col()])
                + u32::from(SEED_GRID[right.row()][right.col()]);
            cages.push(Cage::new(vec![left, right], target));
        }
        let last = Cell::new(row, 8);
        cages.push(Cage::new(
            vec![last],
            u32::from(SEED_GRID[last.row()][last.col()]),
        ));
    }
    (cages, SEED_GRID)
}

/// Panics unless `grid` is a complete, valid solution for `cages`: every
/// house a permutation of 1..=9, every cage distinct and on target.
pub(crate) fn assert_valid_solution(grid: &Grid, cages: &CageSet) {
    for index in 0..81 {
        let cell = Cell::from_index(index);
        let value = grid
            .value(cell)
            .unwrap_or_else(|| panic!("{cell} left unassigned"));
        assert!((1..=9).contains(&value), "{cell} holds {value}");
    }

    for house in 0..9u8 {
        let mut row = CandidateSet::EMPTY;
        let mut col = CandidateSet::EMPTY;
        let mut boxed = CandidateSet::EMPTY;
        for k in 0..9u8 {
            row.insert(grid.value(Cell::new(house, k)).unwrap());
            col.insert(grid.value(Cell::new(k, house)).unwrap());
            let box_cell = Cell::new(
                (house / 3) * 3 + k / 3,
                (house % 3) * 3 + k % 3,
            );
            boxed.insert(grid.value(box_cell).unwrap());
        }
        assert_eq!(row, CandidateSet::FULL, "row {house} is not a permutation");
        assert_eq!(col, CandidateSet::FULL, "column {house} is not a permutation");
        assert_eq!(boxed, CandidateSet::FULL, "box {house} is not a permutation");
    }

    for cage in cages.cages() {
        let mut seen = CandidateSet::EMPTY;
        let mut sum = 0u32;
        for &cell in cage.cells() {
            let value = grid.value(cell).unwrap();
            assert!(
                !seen.contains(value),
                "value {value} repeats inside a cage at {cell}"
            );
            seen.insert(value);
            sum += u32::from(value);
        }
        assert_eq!(sum, cage.target(), "cage sum mismatch");
    }
}
