//! Contains the [`RenbanConstraint`] struct for consecutive-set lines.

use sudoku_engine::prelude::*;

/// A [`Constraint`] for a renban line: the cells hold a set of consecutive,
/// non-repeating digits in any order.
#[derive(Debug)]
pub struct RenbanConstraint {
    specific_name: String,
    cells: Vec<CellIndex>,
}

impl RenbanConstraint {
    pub fn new(cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("Renban at {}", cells[0]),
            cells,
        }
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    /// Masks of each window of consecutive values the line could occupy.
    fn windows(&self) -> impl Iterator<Item = ValueMask> {
        let length = self.cells.len();
        (1..=SIZE - length + 1)
            .map(move |low| ValueMask::from_between_inclusive(low, low + length - 1))
    }
}

impl Constraint for RenbanConstraint {
    fn name(&self) -> &str {
        "Renban"
    }

    fn specific_name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_weak_links(&self) -> Vec<(CandidateIndex, CandidateIndex)> {
        let length = self.cells.len();
        let mut result = if length < SIZE {
            nonrepeat_links(self.cells.iter().copied())
        } else {
            Vec::new()
        };

        // Values too far apart cannot share a window of this length.
        for (i, &cell0) in self.cells.iter().enumerate() {
            for &cell1 in &self.cells[i + 1..] {
                for value0 in 1..=SIZE {
                    for value1 in 1..=SIZE {
                        if value0.abs_diff(value1) >= length {
                            result.push((cell0.candidate(value0), cell1.candidate(value1)));
                        }
                    }
                }
            }
        }

        result
    }

    fn get_houses(&self) -> Vec<House> {
        if self.cells.len() == SIZE {
            vec![House::new(&self.specific_name, &self.cells)]
        } else {
            Vec::new()
        }
    }

    fn step_logic(&self, board: &mut Board, is_brute_forcing: bool) -> LogicalStepResult {
        let before: Vec<ValueMask> = self.cells.iter().map(|&cell| board.cell(cell)).collect();

        // A window is live when every cell can take a value in it and every
        // value in it fits in some cell.
        let mut keep = ValueMask::new();
        for window in self.windows() {
            let covers_cells = before.iter().all(|&mask| !(mask & window).is_empty());
            let covers_values = window.into_iter().all(|value| {
                self.cells.iter().any(|&cell| board.cell(cell).has(value))
            });
            if covers_cells && covers_values {
                keep = keep | window;
            }
        }

        if keep.is_empty() {
            let desc = (!is_brute_forcing)
                .then(|| format!("no run of {} fits {}", self.cells.len(), compact_name(&self.cells)).into());
            return LogicalStepResult::Invalid(desc);
        }

        let mut result = LogicResult::None;
        for &cell in &self.cells {
            match board.keep_mask(cell, keep) {
                LogicResult::Invalid => return LogicalStepResult::Invalid(None),
                other => result = result.combine(other),
            }
        }

        match result {
            LogicResult::Changed => {
                let desc = (!is_brute_forcing).then(|| {
                    let elims = EliminationList::from_mask_diff(board, &self.cells, &before);
                    LogicalStepDesc::from_elims(
                        &format!("{} holds a consecutive run", compact_name(&self.cells)),
                        &elims,
                    )
                });
                LogicalStepResult::Changed(desc)
            }
            _ => LogicalStepResult::None,
        }
    }

    fn constraint_hash(&self) -> String {
        format!("Renban:{}", compact_name(&self.cells))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_renban_window_narrowing() {
        let cells: Vec<CellIndex> = (0..3).map(|col| CellIndex::from_rc(0, col)).collect();
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(RenbanConstraint::new(cells.clone())))
            .build()
            .unwrap();

        assert!(solver.set_value(cells[0], 5));
        assert!(solver.consolidate() != LogicResult::Invalid);

        // The run must cover 5, so only 3..=7 survive alongside it.
        for &cell in &cells[1..] {
            assert_eq!(solver.board().cell(cell).to_vec(), vec![3, 4, 6, 7]);
        }
    }

    #[test]
    fn test_renban_far_values_linked() {
        let cells: Vec<CellIndex> = (0..3).map(|col| CellIndex::from_rc(0, col)).collect();
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(RenbanConstraint::new(cells.clone())))
            .build()
            .unwrap();

        let links = solver.board().weak_links();
        // 1 and 4 cannot share a three-long run; 1 and 3 can.
        assert!(links.is_linked(cells[0].candidate(1), cells[2].candidate(4)));
        assert!(!links.is_linked(cells[0].candidate(1), cells[2].candidate(3)));
    }
}
