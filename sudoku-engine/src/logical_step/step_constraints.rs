use crate::prelude::*;

/// Applies constraint-specific step logic, in constraint order.
#[derive(Debug)]
pub struct StepConstraints;

impl LogicalStep for StepConstraints {
    fn name(&self) -> &'static str {
        "Step Constraints"
    }

    fn difficulty(&self) -> u32 {
        6
    }

    fn has_own_prefix(&self) -> bool {
        true
    }

    fn is_active_during_brute_force_solves(&self) -> bool {
        true
    }

    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult {
        let board_data = board.data();
        for constraint in board_data.constraints() {
            let result = constraint.step_logic(board, !generate_description);
            if !result.is_none() {
                return result.with_prefix(&format!("{}: ", constraint.specific_name()));
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
    struct RemoveCandidateConstraint {
        specific_name: String,
        candidate: CandidateIndex,
    }

    impl RemoveCandidateConstraint {
        fn new(candidate: CandidateIndex) -> Self {
            Self {
                specific_name: format!("Remove {}", candidate),
                candidate,
            }
        }
    }

    impl Constraint for RemoveCandidateConstraint {
        fn name(&self) -> &str {
            &self.specific_name
        }

        fn step_logic(&self, board: &mut Board, _is_brute_forcing: bool) -> LogicalStepResult {
            if !board.has_candidate(self.candidate) {
                return LogicalStepResult::None;
            }
            if !board.clear_candidate(self.candidate) {
                return LogicalStepResult::Invalid(Some(
                    format!("{} cannot be removed.", self.candidate).into(),
                ));
            }
            LogicalStepResult::Changed(Some(format!("{} removed.", self.candidate).into()))
        }
    }

    #[test]
    fn test_step_constraints() {
        let candidate1 = CellIndex::from_rc(0, 0).candidate(1);
        let candidate2 = CellIndex::from_rc(0, 1).candidate(1);
        let mut board = Board::new(
            &[],
            vec![
                Arc::new(RemoveCandidateConstraint::new(candidate1)),
                Arc::new(RemoveCandidateConstraint::new(candidate2)),
            ],
        );
        let step_constraints = StepConstraints;

        // One candidate removed per step, in constraint order.
        let result = step_constraints.run(&mut board, true);
        assert!(result.is_changed());
        assert_eq!(
            result.description().unwrap().to_string(),
            "Remove 1r1c1: 1r1c1 removed."
        );
        assert!(!board.has_candidate(candidate1));
        assert!(board.has_candidate(candidate2));

        let result = step_constraints.run(&mut board, true);
        assert!(result.is_changed());
        assert!(!board.has_candidate(candidate2));

        assert!(step_constraints.run(&mut board, true).is_none());
    }

    #[test]
    fn test_step_constraints_invalid() {
        let candidate1 = CellIndex::from_rc(0, 0).candidate(1);
        let mut board = Board::new(
            &[],
            vec![Arc::new(RemoveCandidateConstraint::new(candidate1))],
        );

        // Reduce r1c1 to just the candidate the constraint wants to remove.
        let cell = CellIndex::from_rc(0, 0);
        assert!(board.clear_candidates((2..=SIZE).map(|value| cell.candidate(value))));

        let result = StepConstraints.run(&mut board, true);
        assert!(result.is_invalid());
        assert_eq!(
            result.description().unwrap().to_string(),
            "Remove 1r1c1: 1r1c1 cannot be removed."
        );
    }
}
