use crate::prelude::*;

/// Pointing (locked candidates): a value confined to two or three cells of a
/// full house is eliminated from every candidate weak-linked to all of them.
///
/// Constraints that know a value must land in a small set of their cells
/// (through [`Constraint::cells_must_contain`]) contribute the same way.
#[derive(Debug)]
pub struct Pointing;

impl Pointing {
    fn eliminate_seeing_all(
        board: &mut Board,
        value: usize,
        cells: &[CellIndex],
        container: &str,
        generate_description: bool,
    ) -> LogicalStepResult {
        let board_data = board.data();
        let candidates: Vec<CandidateIndex> =
            cells.iter().map(|&cell| cell.candidate(value)).collect();

        let mut elims = EliminationList::new();
        for candidate in board_data.weak_links().calc_elims(&candidates) {
            if board.has_candidate(candidate) {
                elims.add(candidate);
            }
        }

        if elims.is_empty() {
            return LogicalStepResult::None;
        }

        let desc = generate_description.then(|| {
            LogicalStepDesc::from_elims(
                &format!("{} in {} at {}", value, container, compact_name(cells)),
                &elims,
            )
            .with_source_candidates(&candidates)
            .with_highlight_cells(cells)
        });

        if !board.clear_candidates(elims.iter()) {
            LogicalStepResult::Invalid(desc)
        } else {
            LogicalStepResult::Changed(desc)
        }
    }
}

impl LogicalStep for Pointing {
    fn name(&self) -> &'static str {
        "Pointing"
    }

    fn difficulty(&self) -> u32 {
        5
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let board_data = board.data();

        for house in board_data.full_houses() {
            for value in 1..=SIZE {
                let positions: Vec<CellIndex> = house
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&cell| {
                        let mask = board.cell(cell);
                        !mask.is_solved() && mask.has(value)
                    })
                    .collect();
                if !(2..=3).contains(&positions.len()) {
                    continue;
                }
                if house.cells().iter().any(|&cell| {
                    board.cell(cell).is_solved() && board.cell(cell).value() == value
                }) {
                    continue;
                }

                let result = Self::eliminate_seeing_all(
                    board,
                    value,
                    &positions,
                    &house.to_string(),
                    generate_description,
                );
                if !result.is_none() {
                    return result;
                }
            }
        }

        for constraint in board_data.constraints() {
            for value in 1..=SIZE {
                let positions = constraint.cells_must_contain(board, value);
                if !(2..=3).contains(&positions.len()) {
                    continue;
                }

                let result = Self::eliminate_seeing_all(
                    board,
                    value,
                    &positions,
                    &constraint.specific_name(),
                    generate_description,
                );
                if !result.is_none() {
                    return result;
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
    fn test_pointing() {
        let mut board = Board::default();
        let pointing = Pointing;

        assert!(pointing.run(&mut board, true).is_none());

        // Confine 5 in box 1 to r1c1 and r1c2.
        for (row, col) in [(0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            assert!(board.clear_value(CellIndex::from_rc(row, col), 5));
        }

        let result = pointing.run(&mut board, true);
        assert!(result.is_changed());

        // 5 is gone from the rest of row 1 but survives elsewhere.
        for col in 3..9 {
            assert!(!board.cell(CellIndex::from_rc(0, col)).has(5));
        }
        assert!(board.cell(CellIndex::from_rc(4, 4)).has(5));
    }
}
