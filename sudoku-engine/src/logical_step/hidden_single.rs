use crate::prelude::*;

/// A "Hidden Single" is a value that can appear in only one cell of a house.
#[derive(Debug)]
pub struct HiddenSingle;

impl LogicalStep for HiddenSingle {
    fn name(&self) -> &'static str {
        "Hidden Single"
    }

    fn difficulty(&self) -> u32 {
        2
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let board_data = board.data();

        for house in board_data.full_houses() {
            let mut at_least_once = ValueMask::new();
            let mut more_than_once = ValueMask::new();
            let mut set_mask = ValueMask::new();
            for &cell in house.cells() {
                let mask = board.cell(cell);
                if mask.is_solved() {
                    set_mask = set_mask | mask;
                } else {
                    more_than_once = more_than_once | (at_least_once & mask);
                    at_least_once = at_least_once | mask;
                }
            }
            set_mask = set_mask.unsolved();

            let all_values_seen = at_least_once | set_mask;
            if all_values_seen != ValueMask::all() {
                let missing_mask = !all_values_seen;
                let desc = generate_description
                    .then(|| format!("{house} has nowhere to place {missing_mask}").into());
                return LogicalStepResult::Invalid(desc);
            }

            let exactly_once = at_least_once & !more_than_once;
            if exactly_once.is_empty() {
                continue;
            }

            let value = exactly_once.min();
            for &cell in house.cells() {
                if board.cell(cell).has(value) && !board.cell(cell).is_solved() {
                    if board.set_solved(cell, value) {
                        let desc = generate_description
                            .then(|| format!("In {house}: {cell}={value}").into());
                        return LogicalStepResult::Changed(desc);
                    } else {
                        let desc = generate_description
                            .then(|| format!("In {house}: {cell} cannot be set to {value}").into());
                        return LogicalStepResult::Invalid(desc);
                    }
                }
            }
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hidden_single() {
        let mut board = Board::default();
        let hidden_single = HiddenSingle;

        assert!(hidden_single.run(&mut board, true).is_none());

        // Clear 9 from all cells in row 1 except r1c1
        board.clear_candidates((1..=8).map(|col| CellIndex::from_rc(0, col).candidate(9)));

        let result = hidden_single.run(&mut board, true);
        assert!(result.is_changed());
        assert!(result.description().is_some());
        assert_eq!(result.to_string(), "In Row 1: r1c1=9");
    }
}
