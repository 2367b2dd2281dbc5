//! Cagey is a Killer Sudoku solver built around a configurable
//! constraint-satisfaction core.
//!
//! A Killer Sudoku adds *cages* to the classic rules: disjoint groups of
//! cells that must hold distinct values summing to a target, together
//! covering the whole grid. The crate models the board, the validated cage
//! partition, and per-cell candidate domains, and drives a backtracking
//! search over them.
//!
//! # Core Concepts
//!
//! - **[`CageSet`](solver::cage::CageSet)**: the validated partition of the
//!   81 cells into cages; structural defects are rejected at construction.
//! - **[`Solver`](solver::engine::Solver)**: the search engine. Its
//!   behavior is chosen by a [`SolverConfig`](solver::strategy::SolverConfig):
//!   cell selection (static scan, minimum remaining values, or cage-ordered)
//!   crossed with propagation (none, or forward checking).
//! - **[`SearchObserver`](solver::observer::SearchObserver)**: a hook that
//!   sees every commit and undo, for renderers that want to animate the
//!   search without touching it.
//!
//! An unsolvable puzzle is an ordinary result (`Ok(None)`), not an error;
//! errors are reserved for malformed cage sets and conflicting pre-filled
//! values.
//!
//! # Example
//!
//! ```
//! use cagey::solver::engine::Solver;
//! use cagey::solver::cage::Cage;
//! use cagey::solver::grid::Cell;
//!
//! # fn main() -> cagey::error::Result<()> {
//! let layout: &[(&[(u8, u8)], u32)] = &[
//!     (&[(0, 0), (0, 1)], 3),
//!     (&[(0, 2), (0, 3), (0, 4)], 15),
//!     (&[(0, 5), (1, 5), (1, 4), (2, 4)], 22),
//!     (&[(0, 6), (1, 6)], 4),
//!     (&[(0, 7), (1, 7)], 16),
//!     (&[(0, 8), (1, 8), (2, 8), (3, 8)], 15),
//!     (&[(1, 0), (1, 1), (2, 0), (2, 1)], 25),
//!     (&[(1, 2), (1, 3)], 17),
//!     (&[(2, 2), (2, 3), (3, 3)], 9),
//!     (&[(2, 5), (3, 5), (4, 5)], 8),
//!     (&[(2, 6), (2, 7), (3, 6)], 20),
//!     (&[(3, 0), (4, 0)], 6),
//!     (&[(3, 1), (3, 2)], 14),
//!     (&[(3, 4), (4, 4), (5, 4)], 17),
//!     (&[(3, 7), (4, 7), (4, 6)], 17),
//!     (&[(4, 1), (4, 2), (5, 1)], 13),
//!     (&[(4, 3), (5, 3), (6, 3)], 20),
//!     (&[(4, 8), (5, 8)], 12),
//!     (&[(5, 0), (6, 0), (7, 0), (8, 0)], 27),
//!     (&[(5, 2), (6, 2), (6, 1)], 6),
//!     (&[(5, 5), (6, 5), (6, 6)], 20),
//!     (&[(5, 6), (5, 7)], 6),
//!     (&[(6, 4), (7, 4), (7, 3), (8, 3)], 10),
//!     (&[(6, 7), (6, 8), (7, 7), (7, 8)], 14),
//!     (&[(7, 1), (8, 1)], 8),
//!     (&[(7, 2), (8, 2)], 16),
//!     (&[(7, 5), (7, 6)], 15),
//!     (&[(8, 4), (8, 5), (8, 6)], 13),
//!     (&[(8, 7), (8, 8)], 17),
//! ];
//!
//! let cages = layout
//!     .iter()
//!     .map(|&(cells, target)| {
//!         Cage::new(cells.iter().map(|&(r, c)| Cell::new(r, c)).collect(), target)
//!     })
//!     .collect();
//!
//! let solver = Solver::from_cages(cages)?;
//! let (solution, stats) = solver.solve(&[])?;
//!
//! let grid = solution.expect("this puzzle has a solution");
//! assert_eq!(grid.value(Cell::new(0, 0)), Some(2));
//! assert_eq!(grid.value(Cell::new(0, 1)), Some(1));
//! println!("solved in {} nodes:\n{grid}", stats.nodes_visited);
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod solver;
