//! Contains [`LogicalSolveResult`] for the outcome of a full logical solve.

use crate::prelude::*;

/// The outcome of running logical steps until quiescence.
///
/// A `Changed` result with an unsolved board means the deduction library was
/// exhausted without a contradiction: the puzzle may be ambiguous or simply
/// too hard for the configured steps. Use a solution count to tell the two
/// apart.
#[derive(Debug, Clone)]
pub enum LogicalSolveResult {
    None,
    Changed(LogicalStepDescList),
    Solved(LogicalStepDescList),
    Invalid(LogicalStepDescList),
    /// The solve was cancelled; any partial trace is discarded.
    Cancelled,
}

impl LogicalSolveResult {
    pub fn is_none(&self) -> bool {
        matches!(self, LogicalSolveResult::None)
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, LogicalSolveResult::Changed(_))
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, LogicalSolveResult::Solved(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, LogicalSolveResult::Invalid(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, LogicalSolveResult::Cancelled)
    }

    pub fn description(&self) -> Option<&LogicalStepDescList> {
        match self {
            LogicalSolveResult::None | LogicalSolveResult::Cancelled => None,
            LogicalSolveResult::Changed(desc)
            | LogicalSolveResult::Solved(desc)
            | LogicalSolveResult::Invalid(desc) => Some(desc),
        }
    }
}

impl std::fmt::Display for LogicalSolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(desc) = self.description() {
            write!(f, "{}", desc)
        } else if self.is_cancelled() {
            write!(f, "Cancelled")
        } else {
            write!(f, "No Description")
        }
    }
}
