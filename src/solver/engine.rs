//! The backtracking driver.
//!
//! One engine expresses every historical variant of this solver through
//! [`SolverConfig`]: the selection policy decides which cell (or cage) to
//! branch on, and the propagation mode decides whether each commit is
//! followed by a forward-checking pass over a snapshotted domain store.
//!
//! Mutation is strictly nested. A recursion level that assigns a value is
//! the level that unassigns it and restores the domain snapshot before
//! reporting failure, so a caller always observes unchanged state when a
//! branch comes back unsolved.

use tracing::debug;

use crate::{
    error::{Error, Result},
    solver::{
        cage::{Cage, CageSet},
        checker,
        domain::{CandidateSet, DomainStore},
        grid::{Cell, Grid},
        heuristics, propagate,
        observer::{NullObserver, SearchObserver},
        stats::SearchStats,
        strategy::{Propagation, SelectionStrategy, SolverConfig},
    },
};

/// A configured Killer Sudoku solver for one cage partition.
///
/// The cage set is fixed at construction; each [`solve`](Solver::solve)
/// call owns its own grid and domain store, so a solver can be reused
/// across puzzles sharing the same cages.
pub struct Solver {
    cages: CageSet,
    config: SolverConfig,
}

impl Solver {
    pub fn new(cages: CageSet) -> Self {
        Self::with_config(cages, SolverConfig::default())
    }

    pub fn with_config(cages: CageSet, config: SolverConfig) -> Self {
        Self { cages, config }
    }

    /// Validates and builds the cage partition, then the solver around it.
    pub fn from_cages(cages: Vec<Cage>) -> Result<Self> {
        Ok(Self::new(CageSet::new(cages)?))
    }

    pub fn cages(&self) -> &CageSet {
        &self.cages
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Solves the puzzle from the given pre-filled values.
    ///
    /// Returns `Ok((Some(grid), stats))` with a complete, valid grid when a
    /// solution exists, and `Ok((None, stats))` when the search exhausts
    /// every branch; an unsolvable puzzle is an ordinary outcome, not an
    /// error. `Err(InvalidInitialState)` is reserved for pre-filled values
    /// that conflict before the search even starts.
    pub fn solve(&self, givens: &[(Cell, u8)]) -> Result<(Option<Grid>, SearchStats)> {
        self.solve_observed(givens, &mut NullObserver)
    }

    /// [`solve`](Solver::solve), reporting every commit and undo to
    /// `observer` as the search runs.
    pub fn solve_observed(
        &self,
        givens: &[(Cell, u8)],
        observer: &mut dyn SearchObserver,
    ) -> Result<(Option<Grid>, SearchStats)> {
        let mut search = Search {
            cages: &self.cages,
            config: self.config,
            cage_order: self.cage_order(),
            grid: Grid::empty(),
            store: DomainStore::new(),
            stats: SearchStats::default(),
            observer,
        };

        debug!(
            cages = self.cages.len(),
            givens = givens.len(),
            config = ?self.config,
            "starting solve"
        );

        for &(cell, value) in givens {
            if !(1..=9).contains(&value)
                || !cell.in_bounds()
                || !search.grid.is_unassigned(cell)
                || !checker::is_safe(&search.grid, &self.cages, cell, value)
            {
                return Err(Error::InvalidInitialState { cell, value });
            }
            search.commit(cell, value);
            if !search.propagate_commit(cell, value) {
                // The pre-filled values are individually consistent but
                // already prove the puzzle has no completion.
                debug!(%cell, value, "givens admit no completion");
                return Ok((None, search.stats));
            }
        }

        let solved = search.run();
        let stats = search.stats.clone();
        debug!(
            solved,
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            "search finished"
        );
        let grid = solved.then(|| search.grid.clone());
        Ok((grid, stats))
    }

    /// Cage processing order for [`SelectionStrategy::CageOrderedMrv`]:
    /// smallest cage first, then smallest target.
    fn cage_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.cages.len()).collect();
        order.sort_by_key(|&i| {
            let cage = &self.cages.cages()[i];
            (cage.size(), cage.target())
        });
        order
    }
}

/// Where to continue after the current cell is settled.
#[derive(Clone, Copy)]
enum Resume {
    WholeGrid,
    CageRun { position: usize },
}

/// Everything one solve call mutates, threaded through the recursion.
struct Search<'a> {
    cages: &'a CageSet,
    config: SolverConfig,
    cage_order: Vec<usize>,
    grid: Grid,
    store: DomainStore,
    stats: SearchStats,
    observer: &'a mut dyn SearchObserver,
}

impl Search<'_> {
    fn run(&mut self) -> bool {
        match self.config.selection {
            SelectionStrategy::CageOrderedMrv => self.solve_cages(0),
            _ => self.solve_grid(),
        }
    }

    fn solve_grid(&mut self) -> bool {
        self.stats.nodes_visited += 1;
        let selected = match self.config.selection {
            SelectionStrategy::StaticScan => heuristics::first_unassigned(&self.grid),
            _ => heuristics::minimum_remaining(&self.grid, &self.store),
        };
        let Some(cell) = selected else {
            return true;
        };
        self.branch(cell, Resume::WholeGrid)
    }

    fn solve_cages(&mut self, position: usize) -> bool {
        self.stats.nodes_visited += 1;
        let Some(&cage_index) = self.cage_order.get(position) else {
            return true;
        };
        let cage = &self.cages.cages()[cage_index];

        match heuristics::minimum_remaining_in_cage(&self.grid, &self.store, cage) {
            Some(cell) => self.branch(cell, Resume::CageRun { position }),
            None => {
                // Cage already filled (by givens, or by overlap with house
                // peers assigned earlier): gate once on the exact sum.
                let sum: u32 = cage
                    .cells()
                    .iter()
                    .filter_map(|&c| self.grid.value(c))
                    .map(u32::from)
                    .sum();
                if sum == cage.target() {
                    self.solve_cages(position + 1)
                } else {
                    self.stats.cage_sum_rejections += 1;
                    false
                }
            }
        }
    }

    /// TRY_VALUE: iterate the cell's candidates in ascending order,
    /// committing, propagating, recursing, and undoing per the config.
    fn branch(&mut self, cell: Cell, resume: Resume) -> bool {
        let candidates = match self.config.propagation {
            Propagation::ForwardChecking => self.store.domain(cell),
            Propagation::None => CandidateSet::FULL,
        };

        for value in candidates.iter() {
            if !checker::is_safe(&self.grid, self.cages, cell, value) {
                continue;
            }

            let snapshot = matches!(self.config.propagation, Propagation::ForwardChecking)
                .then(|| self.store.snapshot());
            self.commit(cell, value);

            let consistent = self.propagate_commit(cell, value);
            let solved = consistent
                && match resume {
                    Resume::WholeGrid => self.solve_grid(),
                    Resume::CageRun { position } => self.solve_cages(position),
                };
            if solved {
                return true;
            }

            self.undo(cell);
            if let Some(snapshot) = &snapshot {
                self.store.restore(snapshot);
            }
            self.stats.backtracks += 1;
        }

        false
    }

    fn commit(&mut self, cell: Cell, value: u8) {
        self.grid.assign(cell, value);
        self.observer.on_assign(cell, value);
    }

    fn undo(&mut self, cell: Cell) {
        self.grid.unassign(cell);
        self.observer.on_unassign(cell);
    }

    /// Runs the configured propagation for a value just committed.
    fn propagate_commit(&mut self, cell: Cell, value: u8) -> bool {
        match self.config.propagation {
            Propagation::None => true,
            Propagation::ForwardChecking => {
                self.stats.propagations += 1;
                self.store.fix(cell, value);
                let consistent =
                    propagate::forward_check(&self.grid, self.cages, &mut self.store, cell, value);
                if !consistent {
                    self.stats.wipeouts += 1;
                }
                consistent
            }
        }
    }
}
