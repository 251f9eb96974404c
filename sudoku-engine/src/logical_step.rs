//! Contains the [`LogicalStep`] trait and the built-in deduction library.

pub mod all_naked_singles;
pub mod hidden_single;
pub mod logical_step_desc;
pub mod logical_step_desc_list;
pub mod logical_step_result;
pub mod naked_single;
pub mod naked_tuples;
pub mod pointing;
pub mod simple_cell_forcing;
pub mod step_constraints;

use crate::board::Board;
use logical_step_result::LogicalStepResult;

/// One deduction technique.
///
/// A step scans the board in a fixed order and performs at most one observable
/// change per invocation (one value set, one elimination list, or one proof of
/// invalidity), so solve traces have deterministic granularity.
pub trait LogicalStep: std::fmt::Debug + Send + Sync {
    /// Name of the technique, used to prefix step descriptions.
    fn name(&self) -> &'static str;

    /// Relative difficulty, used by step scoring.
    fn difficulty(&self) -> u32 {
        1
    }

    /// Whether this step runs during user-facing logical solves.
    fn is_active_during_logical_solves(&self) -> bool {
        true
    }

    /// Whether this step runs during brute-force propagation.
    fn is_active_during_brute_force_solves(&self) -> bool {
        false
    }

    /// Whether the step writes its own prefix into descriptions.
    fn has_own_prefix(&self) -> bool {
        false
    }

    /// Performs one deduction. Descriptions are generated only when requested;
    /// a step may use `generate_description == false` as a signal that it is
    /// running inside brute-force propagation and trade thoroughness for
    /// speed.
    fn run(&self, board: &mut Board, generate_description: bool) -> LogicalStepResult;
}
