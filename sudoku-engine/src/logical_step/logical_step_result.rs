//! Contains [`LogicalStepResult`], the outcome of one deduction attempt.

use crate::prelude::*;

/// The outcome of running one logical step, optionally carrying a
/// human-readable description of what happened.
#[derive(Clone, Debug)]
pub enum LogicalStepResult {
    /// The step found nothing to do.
    None,
    /// The step changed the board.
    Changed(Option<LogicalStepDesc>),
    /// The step proved the board invalid.
    Invalid(Option<LogicalStepDesc>),
}

impl LogicalStepResult {
    pub fn is_none(&self) -> bool {
        matches!(self, LogicalStepResult::None)
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, LogicalStepResult::Changed(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, LogicalStepResult::Invalid(_))
    }

    pub fn description(&self) -> Option<&LogicalStepDesc> {
        match self {
            LogicalStepResult::None => None,
            LogicalStepResult::Changed(desc) => desc.as_ref(),
            LogicalStepResult::Invalid(desc) => desc.as_ref(),
        }
    }

    /// The same result with its description (if any) prefixed.
    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        let map = |desc: &Option<LogicalStepDesc>| desc.as_ref().map(|d| d.with_prefix(prefix));
        match self {
            LogicalStepResult::None => LogicalStepResult::None,
            LogicalStepResult::Changed(desc) => LogicalStepResult::Changed(map(desc)),
            LogicalStepResult::Invalid(desc) => LogicalStepResult::Invalid(map(desc)),
        }
    }

    /// Collapses to the plain [`LogicResult`], dropping any description.
    pub fn to_logic_result(&self) -> LogicResult {
        match self {
            LogicalStepResult::None => LogicResult::None,
            LogicalStepResult::Changed(_) => LogicResult::Changed,
            LogicalStepResult::Invalid(_) => LogicResult::Invalid,
        }
    }
}

impl From<LogicResult> for LogicalStepResult {
    fn from(result: LogicResult) -> Self {
        match result {
            LogicResult::Invalid => LogicalStepResult::Invalid(None),
            LogicResult::Changed | LogicResult::Solved => LogicalStepResult::Changed(None),
            LogicResult::None => LogicalStepResult::None,
        }
    }
}

impl std::fmt::Display for LogicalStepResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(desc) = self.description() {
            write!(f, "{desc}")
        } else {
            write!(f, "No Description")
        }
    }
}
