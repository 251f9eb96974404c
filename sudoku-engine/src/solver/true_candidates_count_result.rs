//! Contains the [`TrueCandidatesCountResult`] enum.

use crate::prelude::*;

/// The result of reducing a board to its true candidates: the candidates that
/// appear in at least one solution.
#[derive(Clone)]
pub enum TrueCandidatesCountResult {
    /// The puzzle has no solutions.
    None,
    /// The puzzle has a unique solution.
    Solved(Box<Board>),
    /// The reduced board, with per-candidate solution counts when requested
    /// (indexed by candidate index; empty when counts were not computed).
    Candidates(Box<Board>, Vec<usize>),
    Error(String),
}

impl TrueCandidatesCountResult {
    pub fn is_none(&self) -> bool {
        matches!(self, TrueCandidatesCountResult::None)
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, TrueCandidatesCountResult::Solved(_))
    }

    pub fn is_candidates(&self) -> bool {
        matches!(self, TrueCandidatesCountResult::Candidates(_, _))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TrueCandidatesCountResult::Error(_))
    }

    pub fn board(&self) -> Option<Box<Board>> {
        match self {
            TrueCandidatesCountResult::Solved(board) => Some(board.clone()),
            TrueCandidatesCountResult::Candidates(board, _) => Some(board.clone()),
            _ => None,
        }
    }

    pub fn candidate_counts(&self) -> Option<&[usize]> {
        match self {
            TrueCandidatesCountResult::Candidates(_, counts) if !counts.is_empty() => Some(counts),
            _ => None,
        }
    }
}
