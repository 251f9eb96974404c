//! Contains [`SingleSolutionResult`] for solves that return one solution.

use crate::prelude::*;

/// The result of a solve that produces at most one solution.
#[derive(Clone)]
pub enum SingleSolutionResult {
    /// No solution is possible.
    None,
    /// A solution was found.
    Solved(Box<Board>),
    /// The solve failed, e.g. it was cancelled.
    Error(String),
}

impl SingleSolutionResult {
    pub fn is_none(&self) -> bool {
        matches!(self, SingleSolutionResult::None)
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SingleSolutionResult::Solved(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SingleSolutionResult::Error(_))
    }

    pub fn board(&self) -> Option<Box<Board>> {
        match self {
            SingleSolutionResult::Solved(board) => Some(board.clone()),
            _ => None,
        }
    }
}

impl std::fmt::Display for SingleSolutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SingleSolutionResult::Solved(board) => write!(f, "{}", board),
            SingleSolutionResult::Error(err) => write!(f, "Error: {}", err),
            SingleSolutionResult::None => write!(f, "No solution"),
        }
    }
}
