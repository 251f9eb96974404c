use crate::prelude::*;

/// "Simple Cell Forcing": every remaining candidate of a cell is weak-linked
/// to the same candidate elsewhere, so that candidate can be eliminated no
/// matter which value the cell takes.
///
/// During brute-force propagation only cells with at most three candidates are
/// scanned; wider cells rarely pay for the intersection.
#[derive(Debug)]
pub struct SimpleCellForcing;

impl LogicalStep for SimpleCellForcing {
    fn name(&self) -> &'static str {
        "Simple Cell Forcing"
    }

    fn difficulty(&self) -> u32 {
        3
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let board_data = board.data();
        let is_brute_forcing = !generate_description;

        for cell in all_cells() {
            let mask = board.cell(cell);
            if mask.is_solved() {
                continue;
            }
            if is_brute_forcing && mask.count() > 3 {
                continue;
            }

            let candidates: Vec<CandidateIndex> =
                mask.into_iter().map(|value| cell.candidate(value)).collect();
            let elim_candidates = board_data.weak_links().calc_elims(&candidates);
            if elim_candidates.is_empty() {
                continue;
            }

            let mut elims = EliminationList::new();
            for candidate in elim_candidates {
                if board.has_candidate(candidate) {
                    elims.add(candidate);
                }
            }

            if !elims.is_empty() {
                let desc = generate_description.then(|| {
                    LogicalStepDesc::from_elims(&cell.to_string(), &elims)
                        .with_source_candidates(&candidates)
                        .with_highlight_cells(&[cell])
                });

                if !board.clear_candidates(elims.iter()) {
                    return LogicalStepResult::Invalid(desc);
                }
                return LogicalStepResult::Changed(desc);
            }
        }

        LogicalStepResult::None
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug)]
    struct ExtraWeakLinksConstraint;

    impl Constraint for ExtraWeakLinksConstraint {
        fn name(&self) -> &str {
            "Test Extra Weak Links"
        }

        fn get_weak_links(&self) -> Vec<(CandidateIndex, CandidateIndex)> {
            let cell_r1c1 = CellIndex::from_rc(0, 0);
            let candidate_1r1c2 = CellIndex::from_rc(0, 1).candidate(1);
            (2..=8)
                .map(|v| (cell_r1c1.candidate(v), candidate_1r1c2))
                .collect()
        }
    }

    #[test]
    fn test_cell_forcing() {
        let mut board = Board::new(&[], vec![Arc::new(ExtraWeakLinksConstraint)]);
        let simple_cell_forcing = SimpleCellForcing;

        // No cell forcing should be possible here
        assert!(simple_cell_forcing.run(&mut board, true).is_none());

        // Remove 9 as a candidate from r1c1; now all of r1c1's candidates
        // (1..=8) see 1r1c2: 2..=8 via the constraint, 1 via the row.
        assert!(board.clear_candidate(CellIndex::from_rc(0, 0).candidate(9)));

        let result = simple_cell_forcing.run(&mut board, true);
        assert!(result.is_changed());
        assert!(!board.cell(CellIndex::from_rc(0, 1)).has(1));
        assert_eq!(result.to_string(), "r1c1 => -1r1c2");
    }
}
