//! Contains the [`LittleKillerConstraint`] struct for clued diagonal sums.

use sudoku_engine::prelude::*;

/// A [`Constraint`] for a little killer clue: the cells along a diagonal must
/// total the clued sum. Digits may repeat wherever Sudoku rules allow, so the
/// diagonal is split into exclusive groups before any sum reasoning.
#[derive(Debug)]
pub struct LittleKillerConstraint {
    specific_name: String,
    cells: Vec<CellIndex>,
    sum: usize,
}

impl LittleKillerConstraint {
    pub fn new(cells: Vec<CellIndex>, sum: usize) -> Self {
        Self {
            specific_name: format!("Little Killer {} at {}", sum, cells[0]),
            cells,
            sum,
        }
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    pub fn sum(&self) -> usize {
        self.sum
    }
}

impl Constraint for LittleKillerConstraint {
    fn name(&self) -> &str {
        "Little Killer"
    }

    fn specific_name(&self) -> String {
        self.specific_name.clone()
    }

    fn init_board(&self, board: &mut Board) -> LogicalStepResult {
        self.step_logic(board, true)
    }

    fn enforce(&self, board: &Board, cell: CellIndex, _value: usize) -> LogicResult {
        if !self.cells.contains(&cell) {
            return LogicResult::None;
        }

        let mut total = 0;
        for &cell in &self.cells {
            let mask = board.cell(cell);
            if !mask.is_solved() {
                return LogicResult::None;
            }
            total += mask.value();
        }

        if total == self.sum {
            LogicResult::None
        } else {
            LogicResult::Invalid
        }
    }

    fn step_logic(&self, board: &mut Board, is_brute_forcing: bool) -> LogicalStepResult {
        let before: Vec<ValueMask> = self.cells.iter().map(|&cell| board.cell(cell)).collect();
        let helper = SumCellsHelper::new(board, &self.cells);
        match helper.restrict_sum_range(board, self.sum, self.sum) {
            LogicResult::Invalid => {
                let desc = (!is_brute_forcing).then(|| {
                    format!("{} cannot total {}", compact_name(&self.cells), self.sum).into()
                });
                LogicalStepResult::Invalid(desc)
            }
            LogicResult::Changed => {
                let desc = (!is_brute_forcing).then(|| {
                    let elims = EliminationList::from_mask_diff(board, &self.cells, &before);
                    LogicalStepDesc::from_elims(
                        &format!("{} must total {}", compact_name(&self.cells), self.sum),
                        &elims,
                    )
                });
                LogicalStepResult::Changed(desc)
            }
            _ => LogicalStepResult::None,
        }
    }

    fn constraint_hash(&self) -> String {
        format!("LittleKiller:{}:{}", self.sum, compact_name(&self.cells))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_short_diagonal() {
        // The up-right diagonal from r3c1 stays inside one box, so its cells
        // are mutually exclusive.
        let cells = vec![
            CellIndex::from_rc(2, 0),
            CellIndex::from_rc(1, 1),
            CellIndex::from_rc(0, 2),
        ];
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(LittleKillerConstraint::new(cells.clone(), 6)))
            .build()
            .unwrap();

        for &cell in &cells {
            assert_eq!(solver.board().cell(cell).to_vec(), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_repeats_allowed_across_groups() {
        // r5c4 and r4c5 see each other (box), but r6c3 shares nothing with
        // r4c5: sum 4 can use a repeated digit across groups.
        let cells = vec![
            CellIndex::from_rc(5, 2),
            CellIndex::from_rc(4, 3),
            CellIndex::from_rc(3, 4),
        ];
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(LittleKillerConstraint::new(cells.clone(), 4)))
            .build()
            .unwrap();

        let board = solver.board();
        assert!(!board.is_grouped(&cells));
        // The exclusive pair must be 1+2, leaving a repeated 1 for the
        // isolated cell: 1+1+2 = 4.
        assert_eq!(board.cell(CellIndex::from_rc(5, 2)).to_vec(), vec![1]);
        assert_eq!(board.cell(CellIndex::from_rc(4, 3)).to_vec(), vec![1, 2]);
        assert_eq!(board.cell(CellIndex::from_rc(3, 4)).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_impossible_clue() {
        let cells = vec![CellIndex::from_rc(0, 0), CellIndex::from_rc(1, 1)];
        let result = SolverBuilder::default()
            .with_constraint(Arc::new(LittleKillerConstraint::new(cells, 19)))
            .build();
        assert!(result.is_err());
    }
}
