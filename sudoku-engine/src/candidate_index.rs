//! Contains [`CandidateIndex`] for identifying a specific (cell, value) pair.

use crate::cell_index::CellIndex;
use crate::grid::{NUM_CANDIDATES, SIZE};

/// Identifies one candidate: a cell together with a value it may hold.
///
/// The 81 cells with 9 candidates each give indices 0 to 728; candidate
/// indices are the vertex ids of the weak-link graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateIndex(usize);

impl CandidateIndex {
    /// Creates a new instance from a linear index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Creates a new instance from a cell and value.
    pub const fn from_cv(cell: CellIndex, value: usize) -> Self {
        Self(cell.index() * SIZE + value - 1)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn cell_index(self) -> CellIndex {
        CellIndex::new(self.0 / SIZE)
    }

    pub const fn value(self) -> usize {
        self.0 % SIZE + 1
    }

    pub const fn cell_index_and_value(self) -> (CellIndex, usize) {
        (self.cell_index(), self.value())
    }
}

impl std::fmt::Display for CandidateIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (cell, value) = self.cell_index_and_value();
        write!(f, "{}{}", value, cell)
    }
}

/// Iterates every candidate of the board in ascending index order.
pub fn all_candidates() -> impl Iterator<Item = CandidateIndex> {
    (0..NUM_CANDIDATES).map(CandidateIndex::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_index() {
        assert_eq!(CandidateIndex::from_cv(CellIndex::new(0), 1).index(), 0);
        assert_eq!(CandidateIndex::from_cv(CellIndex::new(1), 1).index(), 9);
        assert_eq!(CandidateIndex::from_cv(CellIndex::new(40), 5).index(), 364);
        assert_eq!(CandidateIndex::from_cv(CellIndex::new(80), 9).index(), 728);

        let candidate = CandidateIndex::new(364);
        assert_eq!(candidate.cell_index(), CellIndex::new(40));
        assert_eq!(candidate.value(), 5);
        assert_eq!(candidate.to_string(), "5r5c5");
    }
}
