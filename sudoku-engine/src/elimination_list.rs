//! Contains [`EliminationList`] for collecting candidates to eliminate.

use crate::prelude::*;
use itertools::Itertools;
use std::{collections::BTreeSet, fmt::Display};

/// An ordered set of candidates to eliminate.
///
/// [`EliminationList::execute`] applies the eliminations to a board; the
/// [`Display`] implementation renders them compactly for step descriptions,
/// e.g. `-1r1c12;-5r4c5`.
#[derive(Clone, Default)]
pub struct EliminationList {
    candidates: BTreeSet<CandidateIndex>,
}

impl EliminationList {
    pub fn new() -> EliminationList {
        EliminationList {
            candidates: BTreeSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, candidate: CandidateIndex) -> bool {
        self.candidates.contains(&candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = CandidateIndex> + '_ {
        self.candidates.iter().copied()
    }

    pub fn add(&mut self, candidate: CandidateIndex) {
        self.candidates.insert(candidate);
    }

    pub fn add_all(&mut self, candidates: &[CandidateIndex]) {
        self.candidates.extend(candidates.iter());
    }

    pub fn add_cell_value(&mut self, cell: CellIndex, value: usize) {
        self.add(cell.candidate(value));
    }

    /// Records every candidate of `mask` that is still present in the cell.
    pub fn add_cell_mask(&mut self, board: &Board, cell: CellIndex, mask: ValueMask) {
        for value in board.cell(cell).unsolved() & mask {
            self.add_cell_value(cell, value);
        }
    }

    /// The candidates of `cells` that were present in `before` (one mask per
    /// cell) but are gone from the board now. Used to describe bulk
    /// restrictions after the fact.
    pub fn from_mask_diff(board: &Board, cells: &[CellIndex], before: &[ValueMask]) -> Self {
        let mut elims = EliminationList::new();
        for (&cell, &old_mask) in cells.iter().zip(before.iter()) {
            let removed = old_mask.unsolved() & !board.cell(cell).unsolved();
            for value in removed {
                elims.add_cell_value(cell, value);
            }
        }
        elims
    }

    /// Applies the eliminations to a board.
    ///
    /// # Example
    /// ```
    /// # use sudoku_engine::prelude::*;
    /// let mut board = Board::default();
    /// let mut elims = EliminationList::new();
    /// elims.add_cell_value(CellIndex::from_rc(3, 4), 3);
    /// elims.add_cell_value(CellIndex::from_rc(3, 5), 3);
    ///
    /// assert!(elims.execute(&mut board).is_changed());
    /// assert!(!board.cell(CellIndex::from_rc(3, 4)).has(3));
    /// assert_eq!(elims.to_string(), "-3r4c56");
    /// ```
    pub fn execute(&self, board: &mut Board) -> LogicalStepResult {
        let mut result = LogicalStepResult::None;
        for &candidate in self.candidates.iter() {
            if board.has_candidate(candidate) {
                if board.clear_candidate(candidate) {
                    if result.is_none() {
                        result = LogicalStepResult::Changed(None);
                    }
                } else {
                    return LogicalStepResult::Invalid(None);
                }
            }
        }

        result
    }
}

impl From<BTreeSet<CandidateIndex>> for EliminationList {
    fn from(candidates: BTreeSet<CandidateIndex>) -> Self {
        Self { candidates }
    }
}

impl FromIterator<CandidateIndex> for EliminationList {
    fn from_iter<I: IntoIterator<Item = CandidateIndex>>(iter: I) -> EliminationList {
        EliminationList {
            candidates: iter.into_iter().collect(),
        }
    }
}

impl Display for EliminationList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.candidates.is_empty() {
            return write!(f, "No eliminations");
        }

        let mut cells_by_value: Vec<Vec<CellIndex>> = vec![vec![]; SIZE];
        for &candidate in self.candidates.iter() {
            let (cell, value) = candidate.cell_index_and_value();
            cells_by_value[value - 1].push(cell);
        }

        let desc = (1..=SIZE)
            .filter(|&value| !cells_by_value[value - 1].is_empty())
            .map(|value| format!("-{}{}", value, compact_name(&cells_by_value[value - 1])))
            .join(";");
        write!(f, "{}", desc)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        let mut elims = EliminationList::new();
        elims.add_cell_value(CellIndex::from_rc(0, 0), 1);
        elims.add_cell_value(CellIndex::from_rc(0, 1), 1);
        elims.add_cell_value(CellIndex::from_rc(1, 0), 2);
        assert_eq!(elims.to_string(), "-1r1c12;-2r2c1");
        assert_eq!(elims.len(), 3);
    }

    #[test]
    fn test_execute_invalid() {
        let mut board = Board::default();
        let cell = CellIndex::from_rc(0, 0);
        let mut elims = EliminationList::new();
        for value in 1..=SIZE {
            elims.add_cell_value(cell, value);
        }
        assert!(elims.execute(&mut board).is_invalid());
    }
}
