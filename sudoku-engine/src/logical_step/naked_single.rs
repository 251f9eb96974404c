use crate::prelude::*;

/// A "Naked Single" is a cell reduced to a single candidate.
///
/// This is the simplest logical step and is required for the solver to function.
#[derive(Debug)]
pub struct NakedSingle;

impl LogicalStep for NakedSingle {
    fn name(&self) -> &'static str {
        "Naked Single"
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        for cell in all_cells() {
            let mask = board.cell(cell);
            if mask.is_solved() {
                continue;
            }

            if mask.is_single() {
                let value = mask.value();
                if board.set_solved(cell, value) {
                    let desc = generate_description.then(|| format!("{}={}", cell, value).into());
                    return LogicalStepResult::Changed(desc);
                } else {
                    let desc = generate_description
                        .then(|| format!("{} cannot be set to {}", cell, value).into());
                    return LogicalStepResult::Invalid(desc);
                }
            } else if mask.is_empty() {
                let desc = generate_description.then(|| format!("{} has no candidates", cell).into());
                return LogicalStepResult::Invalid(desc);
            }
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_naked_single() {
        let mut board = Board::default();
        let naked_single = NakedSingle;

        assert!(naked_single.run(&mut board, true).is_none());

        // Clear all candidates except 9 from r1c1
        let cell = CellIndex::from_rc(0, 0);
        board.clear_candidates((1..=8).map(|v| cell.candidate(v)));

        let result = naked_single.run(&mut board, true);
        assert!(result.is_changed());
        assert_eq!(result.to_string(), "r1c1=9");
    }
}
