//! Search configuration: which cell to branch on next, and how much
//! propagation to run after each commit.
//!
//! The matrix of the two enums covers the whole family of historical
//! killer-sudoku solvers this crate grew out of, from plain backtracking
//! over a row-major scan up to cage-ordered search with forward checking.

/// How the engine picks the next cell to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionStrategy {
    /// First unassigned cell in row-major order.
    StaticScan,
    /// Minimum remaining values over the whole grid: always branch on the
    /// unassigned cell with the fewest candidates left.
    #[default]
    GlobalMrv,
    /// Process cages one at a time, smallest cage (then smallest target)
    /// first, picking cells within the current cage by minimum remaining
    /// values. A cage is finished before the next one is touched.
    CageOrderedMrv,
}

/// How much domain narrowing runs after each assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Propagation {
    /// No domain bookkeeping at all; candidates are 1..=9 filtered through
    /// the constraint checker.
    None,
    /// Forward checking: narrow the domains of row/column/box/cage peers
    /// after each commit and backtrack on any wipe-out.
    #[default]
    ForwardChecking,
}

/// The complete search configuration for a [`Solver`](crate::solver::engine::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    pub selection: SelectionStrategy,
    pub propagation: Propagation,
}

impl SolverConfig {
    pub fn new(selection: SelectionStrategy, propagation: Propagation) -> Self {
        Self {
            selection,
            propagation,
        }
    }

    /// All six selection/propagation combinations, for exhaustive
    /// comparisons in tests and benchmarks.
    pub fn matrix() -> [SolverConfig; 6] {
        let mut configs = [SolverConfig::default(); 6];
        let mut i = 0;
        for selection in [
            SelectionStrategy::StaticScan,
            SelectionStrategy::GlobalMrv,
            SelectionStrategy::CageOrderedMrv,
        ] {
            for propagation in [Propagation::None, Propagation::ForwardChecking] {
                configs[i] = SolverConfig::new(selection, propagation);
                i += 1;
            }
        }
        configs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_global_mrv_with_forward_checking() {
        let config = SolverConfig::default();
        assert_eq!(config.selection, SelectionStrategy::GlobalMrv);
        assert_eq!(config.propagation, Propagation::ForwardChecking);
    }

    #[test]
    fn matrix_enumerates_every_combination() {
        let matrix = SolverConfig::matrix();
        assert_eq!(matrix.len(), 6);
        for i in 0..matrix.len() {
            for j in 0..i {
                assert_ne!(matrix[i], matrix[j]);
            }
        }
    }
}
