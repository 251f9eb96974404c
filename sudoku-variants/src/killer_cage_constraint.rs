//! Contains the [`KillerCageConstraint`] struct for killer cages.

use sudoku_engine::prelude::*;

/// A [`Constraint`] for a killer cage: a group of cells which cannot repeat
/// digits and, when a sum is given, must total it exactly.
#[derive(Debug)]
pub struct KillerCageConstraint {
    specific_name: String,
    cells: Vec<CellIndex>,
    sum: Option<usize>,
}

impl KillerCageConstraint {
    pub fn new(cells: Vec<CellIndex>, sum: Option<usize>) -> Self {
        let mut cells = cells;
        cells.sort();
        cells.dedup();

        let specific_name = match sum {
            Some(sum) => format!("Killer Cage {} at {}", sum, cells[0]),
            None => format!("Killer Cage at {}", cells[0]),
        };
        Self {
            specific_name,
            cells,
            sum,
        }
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    pub fn sum(&self) -> Option<usize> {
        self.sum
    }

    /// Solved subtotal and count of solved cells.
    fn solved_total(&self, board: &Board) -> (usize, usize) {
        let mut total = 0;
        let mut solved = 0;
        for &cell in &self.cells {
            let mask = board.cell(cell);
            if mask.is_solved() {
                total += mask.value();
                solved += 1;
            }
        }
        (total, solved)
    }
}

impl Constraint for KillerCageConstraint {
    fn name(&self) -> &str {
        "Killer Cage"
    }

    fn specific_name(&self) -> String {
        self.specific_name.clone()
    }

    fn init_board(&self, board: &mut Board) -> LogicalStepResult {
        let Some(sum) = self.sum else {
            return LogicalStepResult::None;
        };

        let helper = SumCellsHelper::new(board, &self.cells);
        match helper.restrict_sum_range(board, sum, sum) {
            LogicResult::Invalid => LogicalStepResult::Invalid(Some(
                format!("{} cannot total {}", compact_name(&self.cells), sum).into(),
            )),
            LogicResult::Changed => LogicalStepResult::Changed(None),
            _ => LogicalStepResult::None,
        }
    }

    fn enforce(&self, board: &Board, cell: CellIndex, _value: usize) -> LogicResult {
        let Some(sum) = self.sum else {
            return LogicResult::None;
        };
        if !self.cells.contains(&cell) {
            return LogicResult::None;
        }

        let (total, solved) = self.solved_total(board);
        if total > sum {
            return LogicResult::Invalid;
        }
        if solved == self.cells.len() && total != sum {
            return LogicResult::Invalid;
        }
        LogicResult::None
    }

    fn step_logic(&self, board: &mut Board, is_brute_forcing: bool) -> LogicalStepResult {
        let Some(sum) = self.sum else {
            return LogicalStepResult::None;
        };

        let before: Vec<ValueMask> = self.cells.iter().map(|&cell| board.cell(cell)).collect();
        let helper = SumCellsHelper::new(board, &self.cells);
        match helper.restrict_sum_range(board, sum, sum) {
            LogicResult::Invalid => {
                let desc = (!is_brute_forcing)
                    .then(|| format!("{} cannot total {}", compact_name(&self.cells), sum).into());
                LogicalStepResult::Invalid(desc)
            }
            LogicResult::Changed => {
                let desc = (!is_brute_forcing).then(|| {
                    let elims = EliminationList::from_mask_diff(board, &self.cells, &before);
                    LogicalStepDesc::from_elims(
                        &format!("{} must total {}", compact_name(&self.cells), sum),
                        &elims,
                    )
                });
                LogicalStepResult::Changed(desc)
            }
            _ => LogicalStepResult::None,
        }
    }

    fn cells_must_contain(&self, board: &Board, value: usize) -> Vec<CellIndex> {
        let Some(sum) = self.sum else {
            return Vec::new();
        };

        let candidates: Vec<CellIndex> = self
            .cells
            .iter()
            .copied()
            .filter(|&cell| {
                let mask = board.cell(cell);
                !mask.is_solved() && mask.has(value)
            })
            .collect();
        if candidates.is_empty() {
            return Vec::new();
        }
        if self
            .cells
            .iter()
            .any(|&cell| board.cell(cell).is_solved() && board.cell(cell).value() == value)
        {
            return Vec::new();
        }

        // The value is required iff the sum is unreachable without it.
        let mut without = board.clone();
        for &cell in &candidates {
            without.clear_value(cell, value);
        }
        let helper = SumCellsHelper::new(&without, &self.cells);
        let reachable = helper
            .possible_sums(&mut without)
            .binary_search(&sum)
            .is_ok();
        if reachable {
            Vec::new()
        } else {
            candidates
        }
    }

    fn get_weak_links(&self) -> Vec<(CandidateIndex, CandidateIndex)> {
        if self.cells.len() < SIZE {
            nonrepeat_links(self.cells.iter().copied())
        } else {
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
        match self.sum {
            Some(sum) => format!("KillerCage:{}:{}", sum, compact_name(&self.cells)),
            None => format!("KillerCage:{}", compact_name(&self.cells)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_cage_forces_minimal_set() {
        let cells: Vec<CellIndex> = (0..3).map(|col| CellIndex::from_rc(0, col)).collect();
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(KillerCageConstraint::new(cells.clone(), Some(6))))
            .build()
            .unwrap();

        // Sum 6 over three distinct digits is 1+2+3.
        for &cell in &cells {
            assert_eq!(u32::from(solver.board().cell(cell)), 0b111);
        }
    }

    #[test]
    fn test_cage_enforce_rejects_overshoot() {
        let cells: Vec<CellIndex> = (0..2).map(|col| CellIndex::from_rc(0, col)).collect();
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(KillerCageConstraint::new(cells.clone(), Some(9))))
            .build()
            .unwrap();

        assert!(solver.set_value(cells[0], 3));
        assert!(solver.consolidate() != LogicResult::Invalid);
        // With 3 placed, only 6 completes the cage.
        assert!(solver.board().cell(cells[1]).is_solved());
        assert_eq!(solver.board().cell(cells[1]).value(), 6);
    }

    #[test]
    fn test_cage_infeasible_sum() {
        let cells: Vec<CellIndex> = (0..2).map(|col| CellIndex::from_rc(0, col)).collect();
        let result = SolverBuilder::default()
            .with_constraint(Arc::new(KillerCageConstraint::new(cells, Some(2))))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_cells_must_contain() {
        let cells: Vec<CellIndex> = (0..2).map(|col| CellIndex::from_rc(0, col)).collect();
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(KillerCageConstraint::new(cells.clone(), Some(17))))
            .build()
            .unwrap();

        // 17 = 8+9: both values are required somewhere in the cage.
        let constraint = &solver.board().constraints()[0];
        let must_have_9 = constraint.cells_must_contain(solver.board(), 9);
        assert_eq!(must_have_9.len(), 2);
        let must_have_1 = constraint.cells_must_contain(solver.board(), 1);
        assert!(must_have_1.is_empty());
    }
}
