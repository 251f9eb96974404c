//! Contains the [`NonRepeatConstraint`] struct for groups of cells which
//! cannot repeat digits.

use sudoku_engine::prelude::*;

/// A [`Constraint`] for a group of cells which cannot repeat digits.
///
/// With exactly nine cells the group is also a house, so house-based steps
/// (hidden singles, tuples, pointing) reason over it.
#[derive(Debug)]
pub struct NonRepeatConstraint {
    specific_name: String,
    cells: Vec<CellIndex>,
}

impl NonRepeatConstraint {
    pub fn new(specific_name: &str, cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: specific_name.to_owned(),
            cells,
        }
    }

    /// The positive (bottom-left to top-right) grid diagonal.
    pub fn from_positive_diagonal() -> Self {
        let cells = (0..SIZE)
            .map(|i| CellIndex::from_rc(SIZE - i - 1, i))
            .collect();
        Self::new("Diagonal+", cells)
    }

    /// The negative (top-left to bottom-right) grid diagonal.
    pub fn from_negative_diagonal() -> Self {
        let cells = (0..SIZE).map(|i| CellIndex::from_rc(i, i)).collect();
        Self::new("Diagonal-", cells)
    }
}

impl Constraint for NonRepeatConstraint {
    fn name(&self) -> &str {
        "Non-Repeat"
    }

    fn specific_name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_weak_links(&self) -> Vec<(CandidateIndex, CandidateIndex)> {
        if self.cells.len() > 1 && self.cells.len() < SIZE {
            nonrepeat_links(self.cells.iter().copied())
        } else {
            // Nine cells become a house, which already links its members.
            Vec::new()
        }
    }

    fn get_houses(&self) -> Vec<House> {
        if self.cells.len() == SIZE {
            vec![House::new(&self.specific_name, &self.cells)]
        } else {
            Vec::new()
        }
    }

    fn constraint_hash(&self) -> String {
        format!("NonRepeat:{}", compact_name(&self.cells))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sudoku_x() {
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(NonRepeatConstraint::from_positive_diagonal()))
            .with_constraint(Arc::new(NonRepeatConstraint::from_negative_diagonal()))
            .with_givens_string(
                "......78............9.........................1.5.........4.....3....5.1....98...",
            )
            .build()
            .unwrap();
        assert_eq!(solver.board().houses().len(), 29);

        let solution_count = solver.find_solution_count(10000, None, None);
        assert!(solution_count.is_exact_count());
        assert_eq!(solution_count.count().unwrap(), 2);
    }

    #[test]
    fn test_diagonal_visibility() {
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(NonRepeatConstraint::from_negative_diagonal()))
            .build()
            .unwrap();

        // r1c1 now sees every diagonal cell.
        let seen = solver.board().seen_cells(CellIndex::from_rc(0, 0));
        assert!(seen.contains(&CellIndex::from_rc(8, 8)));
        assert_eq!(seen.len(), 20 + 6);
    }
}
