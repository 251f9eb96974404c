//! Contains the [`Constraint`] trait through which variant rules plug into the solver.

use crate::board::Board;
use crate::candidate_index::CandidateIndex;
use crate::cell_index::CellIndex;
use crate::house::House;
use crate::logic_result::LogicResult;
use crate::logical_step::logical_step_result::LogicalStepResult;
use std::sync::Arc;

/// Defines the behavior of one variant rule.
///
/// Most methods are optional; anything but the simplest constraint will
/// override several of them. The general division of labor:
///
/// - [`Constraint::get_weak_links`] declares which candidate pairs can never
///   both be true. The solver folds these into the global graph at build time
///   and derives cell visibility, cell forcing, and pointing eliminations from
///   them, so well-chosen links make explicit step logic unnecessary for many
///   rules.
/// - [`Constraint::enforce`] is a pure violation check run whenever a value is
///   placed. Keep it simple: verify only the direct rule (a completed cage
///   sums correctly, say). It cannot change the board; eliminations belong in
///   the weak links or in step logic.
/// - [`Constraint::step_logic`] performs one atomic deduction during solving.
pub trait Constraint: std::fmt::Debug + Send + Sync {
    /// A generic name for the constraint, independent of how it was initialized.
    fn name(&self) -> &str;

    /// A name specific to this instance, such as "Killer Cage at r1c1".
    fn specific_name(&self) -> String {
        self.name().to_owned()
    }

    /// Constraints are iterated in ascending sort order (ties keep
    /// registration order), which keeps solving deterministic.
    fn sort_order(&self) -> i32 {
        0
    }

    /// Called during solver construction so the constraint can narrow the
    /// initial candidates. Called repeatedly on all constraints until all of
    /// them report [`LogicalStepResult::None`], so constraints can react to
    /// each other.
    fn init_board(&self, _board: &mut Board) -> LogicalStepResult {
        LogicalStepResult::None
    }

    /// Called when a value has just been placed. Returns
    /// [`LogicResult::Invalid`] iff the placement violates this constraint.
    /// Any other result is treated as "no violation".
    fn enforce(&self, _board: &Board, _cell: CellIndex, _value: usize) -> LogicResult {
        LogicResult::None
    }

    /// Performs a single step of deduction for this constraint.
    ///
    /// When `is_brute_forcing` is set the result will never be shown to a
    /// user: skip description generation, and skip any logic that is slower
    /// than guessing.
    fn step_logic(&self, _board: &mut Board, _is_brute_forcing: bool) -> LogicalStepResult {
        LogicalStepResult::None
    }

    /// Cells which must contain the given value, if the constraint can tell.
    ///
    /// For example, a killer cage whose sum is unreachable without a 9 returns
    /// every cage cell that can still hold 9. Used for pointing-style
    /// eliminations.
    fn cells_must_contain(&self, _board: &Board, _value: usize) -> Vec<CellIndex> {
        Vec::new()
    }

    /// Candidate pairs that can never both be true. A self-pair `(a, a)`
    /// means the candidate is never possible and is eliminated immediately.
    fn get_weak_links(&self) -> Vec<(CandidateIndex, CandidateIndex)> {
        Vec::new()
    }

    /// Houses created by this constraint, such as an extra region or a
    /// nine-cell cage.
    fn get_houses(&self) -> Vec<House> {
        Vec::new()
    }

    /// A canonical identity string: two constraint instances with equal
    /// hashes must accept exactly the same placements.
    fn constraint_hash(&self) -> String {
        self.specific_name()
    }

    /// Splits a compound constraint into independently-hashable primitives,
    /// or `None` when the constraint is already primitive. Used when
    /// comparing two solvers for inheritance.
    fn split_to_primitives(&self) -> Option<Vec<Arc<dyn Constraint>>> {
        None
    }
}
