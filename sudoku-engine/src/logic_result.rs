//! Contains the [`LogicResult`] enum for reporting the outcome of a logic operation.

/// The outcome of a logic operation on the board.
///
/// * `None`: nothing changed.
/// * `Changed`: at least one candidate was removed or value set.
/// * `Invalid`: a contradiction was found; no solution exists from this state.
/// * `Solved`: every cell has a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicResult {
    None,
    Changed,
    Invalid,
    Solved,
}

impl LogicResult {
    pub fn is_none(self) -> bool {
        self == LogicResult::None
    }

    pub fn is_changed(self) -> bool {
        self == LogicResult::Changed
    }

    pub fn is_invalid(self) -> bool {
        self == LogicResult::Invalid
    }

    pub fn is_solved(self) -> bool {
        self == LogicResult::Solved
    }

    /// Folds another outcome into this one. Invalid dominates, then solved,
    /// then changed.
    #[must_use]
    pub fn combine(self, other: LogicResult) -> LogicResult {
        use LogicResult::*;
        match (self, other) {
            (Invalid, _) | (_, Invalid) => Invalid,
            (Solved, _) | (_, Solved) => Solved,
            (Changed, _) | (_, Changed) => Changed,
            _ => None,
        }
    }
}
