//! Contains the [`ThermometerConstraint`] struct for strictly increasing lines.

use itertools::Itertools;
use sudoku_engine::prelude::*;

/// A [`Constraint`] for a thermometer: digits strictly increase from the bulb
/// to the tip.
///
/// Most of the work is done by weak links declared at build time: a candidate
/// later on the line conflicts with any earlier candidate it cannot exceed by
/// the required amount, and positions whose value cannot fit on the line at
/// all are eliminated outright.
#[derive(Debug)]
pub struct ThermometerConstraint {
    specific_name: String,
    cells: Vec<CellIndex>,
}

impl ThermometerConstraint {
    /// `cells` run from the bulb to the tip.
    pub fn new(cells: Vec<CellIndex>) -> Self {
        Self {
            specific_name: format!("Thermometer at {}", cells[0]),
            cells,
        }
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }
}

impl Constraint for ThermometerConstraint {
    fn name(&self) -> &str {
        "Thermometer"
    }

    fn specific_name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_weak_links(&self) -> Vec<(CandidateIndex, CandidateIndex)> {
        let length = self.cells.len();
        let mut result = Vec::new();

        for (position, &cell) in self.cells.iter().enumerate() {
            // A value must leave room for the earlier and later cells.
            let lowest = position + 1;
            let highest = SIZE - (length - position - 1);
            for value in 1..=SIZE {
                if value < lowest || value > highest {
                    let candidate = cell.candidate(value);
                    result.push((candidate, candidate));
                }
            }
        }

        for (earlier, later) in (0..self.cells.len()).tuple_combinations() {
            let gap = later - earlier;
            for earlier_value in 1..=SIZE {
                for later_value in 1..=SIZE {
                    if later_value < earlier_value + gap {
                        result.push((
                            self.cells[earlier].candidate(earlier_value),
                            self.cells[later].candidate(later_value),
                        ));
                    }
                }
            }
        }

        result
    }

    fn step_logic(&self, board: &mut Board, is_brute_forcing: bool) -> LogicalStepResult {
        let before: Vec<ValueMask> = self.cells.iter().map(|&cell| board.cell(cell)).collect();

        // Cascade lower bounds up the line, then upper bounds back down.
        let mut result = LogicResult::None;
        let mut lowest = 0;
        for &cell in &self.cells {
            let mask = board.cell(cell);
            if mask.is_empty() {
                return LogicalStepResult::Invalid(None);
            }
            lowest = lowest.max(mask.min().max(lowest + 1));
            if lowest > SIZE {
                return LogicalStepResult::Invalid(None);
            }
            match board.keep_mask(cell, ValueMask::from_higher_equal(lowest)) {
                LogicResult::Invalid => return LogicalStepResult::Invalid(None),
                other => result = result.combine(other),
            }
        }

        let mut highest = SIZE + 1;
        for &cell in self.cells.iter().rev() {
            let mask = board.cell(cell);
            highest = highest.min(mask.max()).min(highest - 1);
            if highest == 0 {
                return LogicalStepResult::Invalid(None);
            }
            match board.keep_mask(cell, ValueMask::from_lower_equal(highest)) {
                LogicResult::Invalid => return LogicalStepResult::Invalid(None),
                other => result = result.combine(other),
            }
        }

        match result {
            LogicResult::Changed => {
                let desc = (!is_brute_forcing).then(|| {
                    let elims = EliminationList::from_mask_diff(board, &self.cells, &before);
                    LogicalStepDesc::from_elims("increasing line bounds", &elims)
                });
                LogicalStepResult::Changed(desc)
            }
            _ => LogicalStepResult::None,
        }
    }

    fn constraint_hash(&self) -> String {
        format!(
            "Thermometer:{}",
            self.cells.iter().map(|cell| cell.to_string()).join("")
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_full_row_thermometer() {
        let cells: Vec<CellIndex> = (0..SIZE).map(|col| CellIndex::from_rc(0, col)).collect();
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(ThermometerConstraint::new(cells.clone())))
            .build()
            .unwrap();

        assert!(solver.consolidate() != LogicResult::Invalid);

        // A nine-cell thermometer is forced to 1..=9 in order.
        for (position, &cell) in cells.iter().enumerate() {
            let mask = solver.board().cell(cell);
            assert!(mask.is_solved());
            assert_eq!(mask.value(), position + 1);
        }
    }

    #[test]
    fn test_position_bounds() {
        let cells: Vec<CellIndex> = (0..3).map(|col| CellIndex::from_rc(0, col)).collect();
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(ThermometerConstraint::new(cells.clone())))
            .build()
            .unwrap();

        // Bulb can't exceed 7; tip can't go below 3.
        assert_eq!(solver.board().cell(cells[0]).to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(solver.board().cell(cells[1]).to_vec(), vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(solver.board().cell(cells[2]).to_vec(), vec![3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_bound_cascade() {
        let cells: Vec<CellIndex> = (0..3).map(|col| CellIndex::from_rc(0, col)).collect();
        let mut solver = SolverBuilder::default()
            .with_constraint(Arc::new(ThermometerConstraint::new(cells.clone())))
            .build()
            .unwrap();

        assert!(solver.set_value(cells[1], 4));
        assert!(solver.consolidate() != LogicResult::Invalid);
        assert_eq!(solver.board().cell(cells[0]).to_vec(), vec![1, 2, 3]);
        assert_eq!(solver.board().cell(cells[2]).to_vec(), vec![5, 6, 7, 8, 9]);
    }
}
