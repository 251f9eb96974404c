//! Scores candidate logical steps to pick the most promising one.

use crate::board::Board;
use crate::logic_result::LogicResult;

/// Policy for ranking candidate logical steps.
#[derive(Clone, Copy, Debug)]
pub struct ScoringPolicy {
    /// Weight of the effectiveness metric against normalized difficulty in the
    /// combined score. Values below 0.5 break combined-score ties by
    /// difficulty first, then effectiveness; 0.5 and above reverse the two.
    pub prefer_effectiveness: f64,
    /// Soft maximum used to normalize step difficulty.
    pub difficulty_soft_max: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            prefer_effectiveness: 0.4,
            difficulty_soft_max: 6.0,
        }
    }
}

/// Tracks the best candidate step seen so far.
///
/// Effectiveness is measured on a throwaway clone that has had the step
/// applied and singles run to a fixpoint: the fraction of candidates still
/// remaining (lower is better). A step whose clone propagation reveals a
/// contradiction outranks every scored step.
pub(crate) struct StepEvaluator {
    policy: ScoringPolicy,
    initial_remaining: f64,
    best: Option<(StepKey, usize)>,
    invalid_index: Option<usize>,
}

type StepKey = (f64, f64, f64);

impl StepEvaluator {
    pub(crate) fn new(policy: ScoringPolicy, initial_remaining: usize) -> Self {
        Self {
            policy,
            initial_remaining: initial_remaining as f64,
            best: None,
            invalid_index: None,
        }
    }

    /// Records a step whose result already proves the board invalid.
    pub(crate) fn record_invalid(&mut self, step_index: usize) {
        if self.invalid_index.is_none() {
            self.invalid_index = Some(step_index);
        }
    }

    /// Scores a step that changed the clone. Returns true when evaluation can
    /// stop early because the step revealed a contradiction.
    pub(crate) fn consider(
        &mut self,
        step_index: usize,
        difficulty: u32,
        applied_clone: &mut Board,
    ) -> bool {
        if applied_clone.apply_singles() == LogicResult::Invalid {
            self.record_invalid(step_index);
            return true;
        }

        let effectiveness = applied_clone.unsolved_candidate_count() as f64 / self.initial_remaining;
        let difficulty = difficulty as f64 / self.policy.difficulty_soft_max;
        let w = self.policy.prefer_effectiveness;
        let combined = w * effectiveness + (1.0 - w) * difficulty;

        let key = if w < 0.5 {
            (combined, difficulty, effectiveness)
        } else {
            (combined, effectiveness, difficulty)
        };

        let better = match &self.best {
            None => true,
            // Strict comparison: ties keep the earlier step, which keeps
            // traces reproducible.
            Some((best_key, _)) => {
                key.partial_cmp(best_key) == Some(std::cmp::Ordering::Less)
            }
        };
        if better {
            self.best = Some((key, step_index));
        }

        false
    }

    /// The index of the chosen step, if any change was found.
    pub(crate) fn best_index(&self) -> Option<usize> {
        self.invalid_index.or(self.best.as_ref().map(|(_, index)| *index))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_prefers_more_effective_step_at_equal_difficulty() {
        let mut evaluator = StepEvaluator::new(ScoringPolicy::default(), 729);

        // A board where a step removed many candidates...
        let mut effective = Board::default();
        assert!(effective.set_solved(CellIndex::new(0), 1));
        // ...versus one where almost nothing happened.
        let mut weak = Board::default();
        assert!(weak.clear_value(CellIndex::new(80), 9));

        assert!(!evaluator.consider(0, 2, &mut weak));
        assert!(!evaluator.consider(1, 2, &mut effective));
        assert_eq!(evaluator.best_index(), Some(1));
    }

    #[test]
    fn test_invalid_outranks() {
        let mut evaluator = StepEvaluator::new(ScoringPolicy::default(), 729);
        let mut good = Board::default();
        assert!(good.set_solved(CellIndex::new(0), 1));
        assert!(!evaluator.consider(0, 1, &mut good));
        evaluator.record_invalid(3);
        assert_eq!(evaluator.best_index(), Some(3));
    }

    #[test]
    fn test_tie_keeps_earlier_step() {
        let mut evaluator = StepEvaluator::new(ScoringPolicy::default(), 729);
        let mut board0 = Board::default();
        assert!(board0.clear_value(CellIndex::new(0), 1));
        let mut board1 = Board::default();
        assert!(board1.clear_value(CellIndex::new(0), 1));
        assert!(!evaluator.consider(0, 2, &mut board0));
        assert!(!evaluator.consider(1, 2, &mut board1));
        assert_eq!(evaluator.best_index(), Some(0));
    }
}
