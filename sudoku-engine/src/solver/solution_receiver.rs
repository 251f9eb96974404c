//! Contains the [`SolutionReceiver`] trait for streaming solutions out of the
//! enumerator, plus collecting and counting implementations.

use crate::prelude::*;

/// Receives solutions from a solution-count solve.
pub trait SolutionReceiver {
    /// Receives one solution. Return false to end the enumeration early.
    fn receive(&mut self, result: Box<Board>) -> bool;

    /// Called periodically with a monotonically increasing number so hosts
    /// can show liveness without measuring time.
    fn progress_ping(&mut self, progress: usize) {
        let _ = progress;
    }
}

/// A [`SolutionReceiver`] that stores every solution.
#[derive(Default)]
pub struct VecSolutionReceiver {
    solutions: Vec<Board>,
}

impl VecSolutionReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solutions(&self) -> &[Board] {
        &self.solutions
    }

    pub fn take_solutions(self) -> Vec<Board> {
        self.solutions
    }
}

impl SolutionReceiver for VecSolutionReceiver {
    fn receive(&mut self, result: Box<Board>) -> bool {
        self.solutions.push(*result);
        true
    }
}

/// A [`SolutionReceiver`] that just counts.
#[derive(Default)]
pub struct CountSolutionReceiver {
    count: usize,
}

impl CountSolutionReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl SolutionReceiver for CountSolutionReceiver {
    fn receive(&mut self, _result: Box<Board>) -> bool {
        self.count += 1;
        true
    }
}
