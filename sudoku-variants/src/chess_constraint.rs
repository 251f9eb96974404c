//! Contains the [`ChessConstraint`] struct for chess-movement restrictions.

use itertools::Itertools;
use sudoku_engine::prelude::*;

/// A [`Constraint`] forbidding a digit from repeating at a set of cell
/// offsets, the way anti-knight and anti-king puzzles do.
#[derive(Debug)]
pub struct ChessConstraint {
    specific_name: String,
    offsets: Vec<(isize, isize)>,
}

impl ChessConstraint {
    /// Creates a new [`ChessConstraint`] with arbitrary offsets.
    pub fn new(specific_name: &str, offsets: Vec<(isize, isize)>) -> Self {
        Self {
            specific_name: specific_name.to_owned(),
            offsets,
        }
    }

    /// Creates a new [`ChessConstraint`] from one offset and all its
    /// reflections.
    pub fn from_symmetric_offset(specific_name: &str, offset: (isize, isize)) -> Self {
        let mut offsets = vec![offset, (offset.1, offset.0)];
        if offset.0 != 0 {
            offsets.push((-offset.0, offset.1));
            offsets.push((offset.1, -offset.0));
        }
        if offset.1 != 0 {
            offsets.push((offset.0, -offset.1));
            offsets.push((-offset.1, offset.0));
        }
        if offset.0 != 0 && offset.1 != 0 {
            offsets.push((-offset.0, -offset.1));
            offsets.push((-offset.1, -offset.0));
        }
        Self::new(specific_name, offsets)
    }

    /// The standard "anti-king" constraint.
    pub fn anti_king() -> Self {
        Self::from_symmetric_offset("Anti-King", (1, 1))
    }

    /// The standard "anti-knight" constraint.
    pub fn anti_knight() -> Self {
        Self::from_symmetric_offset("Anti-Knight", (1, 2))
    }

    /// The standard "anti-camel" constraint.
    pub fn anti_camel() -> Self {
        Self::from_symmetric_offset("Anti-Camel", (1, 3))
    }

    /// An anti-taxicab constraint: digits cannot repeat at the given taxicab
    /// distance.
    pub fn anti_taxicab(distance: usize) -> Self {
        let distance = distance as isize;
        let mut offsets = Vec::new();
        for row in -distance..=distance {
            for col in -distance..=distance {
                if row != 0 && col != 0 && row.abs() + col.abs() == distance {
                    offsets.push((row, col));
                }
            }
        }

        Self::new(&format!("Anti-Taxicab {}", distance), offsets)
    }
}

impl Constraint for ChessConstraint {
    fn name(&self) -> &str {
        "Chess"
    }

    fn specific_name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_weak_links(&self) -> Vec<(CandidateIndex, CandidateIndex)> {
        let mut result = Vec::new();
        for cell in all_cells() {
            for &(row_offset, col_offset) in &self.offsets {
                if let Some(other_cell) = cell.offset(row_offset, col_offset) {
                    for value in 1..=SIZE {
                        result.push((cell.candidate(value), other_cell.candidate(value)));
                    }
                }
            }
        }
        result
    }

    fn constraint_hash(&self) -> String {
        let offsets = self.offsets.iter().sorted().collect_vec();
        format!("Chess:{:?}", offsets)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_anti_knight_seen_cells() {
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(ChessConstraint::anti_knight()))
            .build()
            .unwrap();

        // 20 standard peers plus 8 knight moves from the center.
        let seen = solver.board().seen_cells(CellIndex::from_rc(4, 4));
        assert_eq!(seen.len(), 28);
        assert!(seen.contains(&CellIndex::from_rc(2, 3)));
        assert!(seen.contains(&CellIndex::from_rc(6, 5)));

        // A corner loses the off-grid knight moves.
        let seen = solver.board().seen_cells(CellIndex::from_rc(0, 0));
        assert_eq!(seen.len(), 22);
    }

    #[test]
    fn test_anti_king_anti_knight_count() {
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(ChessConstraint::anti_king()))
            .with_constraint(Arc::new(ChessConstraint::anti_knight()))
            .with_givens_string(
                "123456789000000000000000000000000000000000000000000000000000000000000000000000000",
            )
            .build()
            .unwrap();

        let solution_count = solver.find_solution_count(10000, None, None);
        assert!(solution_count.is_exact_count());
        assert_eq!(solution_count.count().unwrap(), 4);
    }
}
