use crate::prelude::*;
use itertools::Itertools;

/// Naked pairs and triples: cells of a house whose combined candidates number
/// exactly two (or three), pinning those values to those cells.
///
/// Eliminations are derived from the weak-link graph: for each pinned value,
/// any candidate linked to every occurrence of that value within the tuple
/// cells is removed. This picks up variant-specific visibility for free.
#[derive(Debug)]
pub struct NakedTuples;

impl LogicalStep for NakedTuples {
    fn name(&self) -> &'static str {
        "Naked Tuples"
    }

    fn difficulty(&self) -> u32 {
        4
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let board_data = board.data();

        for tuple_size in 2..=3usize {
            for house in board_data.houses() {
                let unset_cells: Vec<CellIndex> = house
                    .cells()
                    .iter()
                    .copied()
                    .filter(|&cell| !board.cell(cell).is_solved())
                    .collect();
                if unset_cells.len() <= tuple_size {
                    continue;
                }

                for tuple_cells in unset_cells.iter().copied().combinations(tuple_size) {
                    let combined = tuple_cells
                        .iter()
                        .fold(ValueMask::new(), |mask, &cell| mask | board.cell(cell));
                    if combined.count() != tuple_size {
                        continue;
                    }

                    let mut elims = EliminationList::new();
                    for value in combined {
                        let candidates: Vec<CandidateIndex> = tuple_cells
                            .iter()
                            .filter(|&&cell| board.cell(cell).has(value))
                            .map(|&cell| cell.candidate(value))
                            .collect();
                        for candidate in board_data.weak_links().calc_elims(&candidates) {
                            if board.has_candidate(candidate) {
                                elims.add(candidate);
                            }
                        }
                    }

                    if elims.is_empty() {
                        continue;
                    }

                    let desc = generate_description.then(|| {
                        let tuple_name = if tuple_size == 2 { "Pair" } else { "Triple" };
                        let sources: Vec<CandidateIndex> = tuple_cells
                            .iter()
                            .flat_map(|&cell| {
                                (board.cell(cell) & combined)
                                    .into_iter()
                                    .map(move |value| cell.candidate(value))
                            })
                            .collect();
                        LogicalStepDesc::from_elims(
                            &format!(
                                "{} {} in {} at {}",
                                tuple_name,
                                combined,
                                house,
                                compact_name(&tuple_cells)
                            ),
                            &elims,
                        )
                        .with_source_candidates(&sources)
                        .with_highlight_cells(&tuple_cells)
                    });

                    if !board.clear_candidates(elims.iter()) {
                        return LogicalStepResult::Invalid(desc);
                    }
                    return LogicalStepResult::Changed(desc);
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
    fn test_naked_pair() {
        let mut board = Board::default();
        let naked_tuples = NakedTuples;

        assert!(naked_tuples.run(&mut board, true).is_none());

        // Reduce r1c1 and r1c2 to {1,2}.
        for cell in [CellIndex::from_rc(0, 0), CellIndex::from_rc(0, 1)] {
            assert_eq!(
                board.keep_mask(cell, ValueMask::from_values(&[1, 2])),
                LogicResult::Changed
            );
        }

        let result = naked_tuples.run(&mut board, true);
        assert!(result.is_changed());

        // 1 and 2 are gone from the rest of row 1 and box 1.
        for col in 2..9 {
            assert!(!board.cell(CellIndex::from_rc(0, col)).has(1));
            assert!(!board.cell(CellIndex::from_rc(0, col)).has(2));
        }
        assert!(!board.cell(CellIndex::from_rc(1, 0)).has(1));
        assert!(!board.cell(CellIndex::from_rc(2, 2)).has(2));
        // Row 2 outside the box is untouched.
        assert!(board.cell(CellIndex::from_rc(1, 3)).has(1));
    }

    #[test]
    fn test_naked_triple() {
        let mut board = Board::default();
        let naked_tuples = NakedTuples;

        // Reduce three cells of column 1 to {4,5,6}.
        for row in [0, 4, 8] {
            assert_eq!(
                board.keep_mask(CellIndex::from_rc(row, 0), ValueMask::from_values(&[4, 5, 6])),
                LogicResult::Changed
            );
        }

        let result = naked_tuples.run(&mut board, true);
        assert!(result.is_changed());
        for row in [1, 2, 3, 5, 6, 7] {
            let mask = board.cell(CellIndex::from_rc(row, 0));
            assert!(!mask.has(4) && !mask.has(5) && !mask.has(6));
        }
    }
}
