//! Contains the [`ArrowConstraint`] struct for arrow sums.

use sudoku_engine::prelude::*;

/// A [`Constraint`] for an arrow: the digit in the circle cell equals the sum
/// of the digits along the shaft.
#[derive(Debug)]
pub struct ArrowConstraint {
    specific_name: String,
    circle: CellIndex,
    shaft: Vec<CellIndex>,
}

impl ArrowConstraint {
    pub fn new(circle: CellIndex, shaft: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("Arrow at {}", circle),
            circle,
            shaft,
        }
    }

    pub fn circle(&self) -> CellIndex {
        self.circle
    }

    pub fn shaft(&self) -> &[CellIndex] {
        &self.shaft
    }

    /// Shaft totals that are also still candidates of the circle.
    fn viable_sums(&self, board: &mut Board) -> Vec<usize> {
        let circle_mask = board.cell(self.circle);
        let helper = SumCellsHelper::new(board, &self.shaft);
        helper
            .possible_sums(board)
            .into_iter()
            .filter(|&sum| sum >= 1 && sum <= SIZE && circle_mask.has(sum))
            .collect()
    }
}

impl Constraint for ArrowConstraint {
    fn name(&self) -> &str {
        "Arrow"
    }

    fn specific_name(&self) -> String {
        self.specific_name.clone()
    }

    fn init_board(&self, board: &mut Board) -> LogicalStepResult {
        self.step_logic(board, true)
    }

    fn enforce(&self, board: &Board, _cell: CellIndex, _value: usize) -> LogicResult {
        let circle_mask = board.cell(self.circle);
        if !circle_mask.is_solved() {
            return LogicResult::None;
        }

        let mut total = 0;
        for &cell in &self.shaft {
            let mask = board.cell(cell);
            if !mask.is_solved() {
                return LogicResult::None;
            }
            total += mask.value();
        }

        if total == circle_mask.value() {
            LogicResult::None
        } else {
            LogicResult::Invalid
        }
    }

    fn step_logic(&self, board: &mut Board, is_brute_forcing: bool) -> LogicalStepResult {
        let cells: Vec<CellIndex> = std::iter::once(self.circle)
            .chain(self.shaft.iter().copied())
            .collect();
        let before: Vec<ValueMask> = cells.iter().map(|&cell| board.cell(cell)).collect();

        let sums = self.viable_sums(board);
        if sums.is_empty() {
            let desc = (!is_brute_forcing).then(|| {
                format!(
                    "no shaft total fits the circle {}",
                    self.circle
                )
                .into()
            });
            return LogicalStepResult::Invalid(desc);
        }

        let circle_keep: ValueMask = sums.iter().copied().collect();
        let mut result = board.keep_mask(self.circle, circle_keep);
        if result != LogicResult::Invalid {
            let helper = SumCellsHelper::new(board, &self.shaft);
            result = result.combine(helper.restrict_sum_set(board, &sums));
        }

        match result {
            LogicResult::Invalid => {
                let desc = (!is_brute_forcing)
                    .then(|| format!("{} cannot be completed", self.specific_name).into());
                LogicalStepResult::Invalid(desc)
            }
            LogicResult::Changed => {
                let desc = (!is_brute_forcing).then(|| {
                    let elims = EliminationList::from_mask_diff(board, &cells, &before);
                    LogicalStepDesc::from_elims(
                        &format!("{} totals {}", compact_name(&self.shaft), self.circle),
                        &elims,
                    )
                });
                LogicalStepResult::Changed(desc)
            }
            _ => LogicalStepResult::None,
        }
    }

    fn constraint_hash(&self) -> String {
        format!(
            "Arrow:{}:{}",
            self.circle,
            compact_name(&self.shaft)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_arrow_restricts_circle() {
        let shaft: Vec<CellIndex> = (1..4).map(|col| CellIndex::from_rc(0, col)).collect();
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(ArrowConstraint::new(
                CellIndex::from_rc(0, 0),
                shaft.clone(),
            )))
            .build()
            .unwrap();

        // Three distinct shaft digits total at least 6, so the circle is 6..9
        // and the shaft cells keep only digits that fit under 9.
        let circle_mask = solver.board().cell(CellIndex::from_rc(0, 0));
        assert_eq!(circle_mask.to_vec(), vec![6, 7, 8, 9]);
        for &cell in &shaft {
            assert!(solver.board().cell(cell).max() <= 6);
        }
    }

    #[test]
    fn test_arrow_completes() {
        let shaft: Vec<CellIndex> = (1..3).map(|col| CellIndex::from_rc(0, col)).collect();
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(ArrowConstraint::new(
                CellIndex::from_rc(0, 0),
                shaft.clone(),
            )))
            .build()
            .unwrap();

        assert!(solver.set_value(CellIndex::from_rc(0, 0), 3));
        assert!(solver.consolidate() != LogicResult::Invalid);
        // 3 = 1+2 in some order along the shaft.
        for &cell in &shaft {
            assert_eq!(solver.board().cell(cell).to_vec(), vec![1, 2]);
        }
    }

    #[test]
    fn test_arrow_enforce_rejects_wrong_total() {
        let shaft = vec![CellIndex::from_rc(4, 4)];
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(ArrowConstraint::new(
                CellIndex::from_rc(0, 0),
                shaft,
            )))
            .build()
            .unwrap();

        assert!(solver.set_value(CellIndex::from_rc(0, 0), 5));
        // The shaft cell must mirror the circle; anything else fails.
        assert!(!solver.set_value(CellIndex::from_rc(4, 4), 7));
    }
}
