//! Per-cell candidate tracking for forward checking.
//!
//! Every unassigned cell carries a [`CandidateSet`], a bitmask over the
//! values 1..=9. The [`DomainStore`] holds all 81 of them in a flat array,
//! which makes [`DomainStore::snapshot`] a plain copy rather than a deep
//! clone of per-cell containers.

use std::fmt;

use crate::solver::grid::Cell;

/// A set of candidate values, stored as a bitmask over 1..=9.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CandidateSet(u16);

impl CandidateSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// All of 1..=9.
    pub const FULL: Self = Self(0b11_1111_1110);

    /// The set containing exactly `value`.
    pub fn singleton(value: u8) -> Self {
        debug_assert!((1..=9).contains(&value));
        Self(1 << value)
    }

    pub fn contains(self, value: u8) -> bool {
        value >= 1 && value <= 9 && self.0 & (1 << value) != 0
    }

    pub fn insert(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.0 |= 1 << value;
    }

    pub fn remove(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.0 &= !(1 << value);
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// If the set holds exactly one value, returns it.
    pub fn sole_value(self) -> Option<u8> {
        if self.len() == 1 {
            Some(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Iterates the values in ascending numeric order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&v| self.contains(v))
    }

    /// Drops every value strictly greater than `limit`.
    pub fn clamp_to(self, limit: u32) -> Self {
        if limit >= 9 {
            self
        } else {
            let mask = (1u16 << (limit + 1)) - 1;
            Self(self.0 & mask)
        }
    }
}

impl fmt::Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An independent copy of every cell's domain, taken by
/// [`DomainStore::snapshot`] and consumed by [`DomainStore::restore`].
#[derive(Clone)]
pub struct DomainSnapshot {
    domains: [CandidateSet; 81],
}

/// The live domains of all 81 cells, indexed by `row * 9 + col`.
///
/// Cells that have been assigned keep a singleton entry (see
/// [`DomainStore::fix`]); the search only ever consults the domains of
/// unassigned cells. A domain reaching the empty set is not an error: it is
/// the wipe-out signal that tells the engine to backtrack.
pub struct DomainStore {
    domains: [CandidateSet; 81],
}

impl DomainStore {
    /// Every cell starts with the full domain {1..9}.
    pub fn new() -> Self {
        Self {
            domains: [CandidateSet::FULL; 81],
        }
    }

    /// Copies the current domains. The copy never aliases the live store.
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains,
        }
    }

    /// Replaces the live domains with a previously taken snapshot, exactly
    /// undoing every narrowing applied since it was taken.
    pub fn restore(&mut self, snapshot: &DomainSnapshot) {
        self.domains = snapshot.domains;
    }

    /// Removes `value` from `cell`'s domain.
    ///
    /// Returns `false` only if the removal emptied the domain; removing a
    /// value that was already absent succeeds trivially.
    pub fn narrow(&mut self, cell: Cell, value: u8) -> bool {
        let domain = &mut self.domains[cell.index()];
        if domain.contains(value) {
            domain.remove(value);
            !domain.is_empty()
        } else {
            true
        }
    }

    pub fn domain(&self, cell: Cell) -> CandidateSet {
        self.domains[cell.index()]
    }

    /// Collapses `cell`'s domain to the single assigned value.
    pub(crate) fn fix(&mut self, cell: Cell, value: u8) {
        self.domains[cell.index()] = CandidateSet::singleton(value);
    }

    pub(crate) fn set(&mut self, cell: Cell, domain: CandidateSet) {
        self.domains[cell.index()] = domain;
    }

    /// Drops every candidate above `limit`; `false` if the domain emptied.
    pub(crate) fn retain_at_most(&mut self, cell: Cell, limit: u32) -> bool {
        let domain = &mut self.domains[cell.index()];
        *domain = domain.clamp_to(limit);
        !domain.is_empty()
    }
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn full_set_holds_all_nine_values() {
        assert_eq!(CandidateSet::FULL.len(), 9);
        assert_eq!(
            CandidateSet::FULL.iter().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn iteration_is_ascending() {
        let mut set = CandidateSet::EMPTY;
        set.insert(7);
        set.insert(2);
        set.insert(9);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 7, 9]);
    }

    #[test]
    fn sole_value_only_on_singletons() {
        assert_eq!(CandidateSet::singleton(4).sole_value(), Some(4));
        assert_eq!(CandidateSet::FULL.sole_value(), None);
        assert_eq!(CandidateSet::EMPTY.sole_value(), None);
    }

    #[test]
    fn clamp_drops_values_above_limit() {
        assert_eq!(
            CandidateSet::FULL.clamp_to(3).iter().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(CandidateSet::FULL.clamp_to(0), CandidateSet::EMPTY);
        assert_eq!(CandidateSet::FULL.clamp_to(12), CandidateSet::FULL);
    }

    #[test]
    fn narrow_reports_wipeout_only_when_it_empties() {
        let mut store = DomainStore::new();
        let cell = Cell::new(4, 4);
        store.set(cell, CandidateSet::singleton(6));

        assert!(store.narrow(cell, 3), "absent value is a no-op");
        assert!(!store.narrow(cell, 6), "removing the last value wipes out");
        assert!(store.domain(cell).is_empty());
    }

    #[test]
    fn restore_is_the_exact_inverse_of_narrowing() {
        let mut store = DomainStore::new();
        let snapshot = store.snapshot();

        for col in 0..9 {
            store.narrow(Cell::new(0, col), 5);
        }
        store.fix(Cell::new(8, 8), 1);
        assert_ne!(store.domain(Cell::new(0, 0)), CandidateSet::FULL);

        store.restore(&snapshot);
        for index in 0..81 {
            assert_eq!(store.domain(Cell::from_index(index)), CandidateSet::FULL);
        }
    }

    #[test]
    fn snapshot_does_not_alias_the_live_store() {
        let mut store = DomainStore::new();
        let snapshot = store.snapshot();
        store.narrow(Cell::new(2, 3), 9);

        let mut other = DomainStore::new();
        other.restore(&snapshot);
        assert_eq!(other.domain(Cell::new(2, 3)), CandidateSet::FULL);
    }

    proptest! {
        // Any interleaving of narrowing operations is fully undone by
        // restoring the snapshot taken before them.
        #[test]
        fn snapshot_restore_round_trips(
            setup in proptest::collection::vec((0..81usize, 1..=9u8), 0..60),
            mutations in proptest::collection::vec((0..81usize, 1..=9u8), 1..60),
        ) {
            let mut store = DomainStore::new();
            for (index, value) in setup {
                store.narrow(Cell::from_index(index), value);
            }

            let before: Vec<CandidateSet> =
                (0..81).map(|i| store.domain(Cell::from_index(i))).collect();
            let snapshot = store.snapshot();

            for (index, value) in mutations {
                store.narrow(Cell::from_index(index), value);
            }
            store.restore(&snapshot);

            let after: Vec<CandidateSet> =
                (0..81).map(|i| store.domain(Cell::from_index(i))).collect();
            prop_assert_eq!(before, after);
        }
    }
}
