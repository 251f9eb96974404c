//! Contains the [`Solver`] struct, the main entry point for solving a puzzle.

pub mod cancellation;
pub mod evaluator;
pub mod logical_solve_result;
pub mod single_solution_result;
pub mod solution_count_result;
pub mod solution_receiver;
pub mod solver_builder;
pub mod true_candidates_count_result;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::RngCore;
use rayon::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::prelude::*;
use cancellation::{is_cancelled, CancelledError};
use evaluator::StepEvaluator;

/// Auxiliary information about a solver, kept out of the hot solving state.
#[derive(Clone, Debug, Default)]
pub struct SolverInfo {
    constraint_descriptions: Vec<String>,
}

impl SolverInfo {
    pub(crate) fn new(constraint_descriptions: Vec<String>) -> Self {
        Self {
            constraint_descriptions,
        }
    }

    /// Human-readable descriptions of the puzzle's constraints, in
    /// registration order.
    pub fn constraint_descriptions(&self) -> &[String] {
        &self.constraint_descriptions
    }
}

/// Where the brute-force search branches next.
enum BranchTarget {
    /// Try each value of the most constrained cell.
    Cell(CellIndex),
    /// A value with exactly two positions in a full house: branch on this
    /// candidate being true or false.
    Bilocal(CandidateIndex),
}

/// The solving facade: owns the board, the deduction library, the scoring
/// policy, and auxiliary info. Built by
/// [`solver_builder::SolverBuilder`]; cloning produces an independent solver
/// sharing only immutable metadata.
#[derive(Clone)]
pub struct Solver {
    pub(crate) board: Board,
    pub(crate) logical_solve_steps: Vec<Arc<dyn LogicalStep>>,
    pub(crate) brute_force_steps: Vec<Arc<dyn LogicalStep>>,
    pub(crate) scoring: ScoringPolicy,
    pub(crate) info: SolverInfo,
}

impl Solver {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn info(&self) -> &SolverInfo {
        &self.info
    }

    pub fn scoring(&self) -> ScoringPolicy {
        self.scoring
    }

    pub fn logical_solve_steps(&self) -> &[Arc<dyn LogicalStep>] {
        &self.logical_solve_steps
    }

    pub fn brute_force_steps(&self) -> &[Arc<dyn LogicalStep>] {
        &self.brute_force_steps
    }

    /// Places a value. Returns false when the placement is impossible or
    /// proves the board infeasible.
    pub fn set_value(&mut self, cell: CellIndex, value: usize) -> bool {
        self.board.set_solved(cell, value)
    }

    /// Removes a candidate. Returns false iff the cell ran out of candidates.
    pub fn clear_value(&mut self, cell: CellIndex, value: usize) -> bool {
        self.board.clear_value(cell, value)
    }

    /// Sets the given values, skipping cells that are already solved.
    pub fn set_givens(&mut self, givens: impl Iterator<Item = (CellIndex, usize)>) -> bool {
        for (cell, value) in givens {
            if !self.board.cell(cell).is_solved() && !self.board.set_solved(cell, value) {
                return false;
            }
        }

        true
    }

    /// Sets givens from an 81-character string in row-major order, where `0`
    /// or any non-digit is an empty cell.
    ///
    /// # Example
    /// ```
    /// # use sudoku_engine::prelude::*;
    /// let mut solver = SolverBuilder::default().build().unwrap();
    /// assert!(!solver.set_givens_from_string("123")); // wrong length
    /// assert!(solver.set_givens_from_string(&("123".to_owned() + &".".repeat(78))));
    /// assert_eq!(solver.board().cell(CellIndex::new(0)).value(), 1);
    /// assert!(!solver.board().cell(CellIndex::new(3)).is_solved());
    /// ```
    pub fn set_givens_from_string(&mut self, givens: &str) -> bool {
        if givens.chars().count() != NUM_CELLS {
            return false;
        }

        let givens = givens.chars().enumerate().filter_map(|(i, c)| {
            let value = c.to_digit(10)?;
            if value == 0 {
                None
            } else {
                Some((CellIndex::new(i), value as usize))
            }
        });
        self.set_givens(givens)
    }

    /// Applies naked and hidden singles to a fixpoint.
    pub fn apply_singles(&mut self) -> LogicResult {
        self.board.apply_singles()
    }

    /// Applies the brute-force step list to a fixpoint on this solver's own
    /// board: singles, then the fast subset of the deduction library, then
    /// every constraint's step logic, restarting from the top after each
    /// change.
    pub fn consolidate(&mut self) -> LogicResult {
        let Solver {
            board,
            brute_force_steps,
            ..
        } = self;
        Self::propagate(brute_force_steps, board, &None).unwrap_or(LogicResult::None)
    }

    fn propagate(
        steps: &[Arc<dyn LogicalStep>],
        board: &mut Board,
        cancellation: &Option<Cancellation>,
    ) -> Result<LogicResult, CancelledError> {
        let mut overall = LogicResult::None;
        loop {
            if is_cancelled(cancellation) {
                return Err(CancelledError);
            }

            let mut changed = false;
            for step in steps {
                let result = step.run(board, false);
                if result.is_invalid() {
                    return Ok(LogicResult::Invalid);
                }
                if result.is_changed() {
                    changed = true;
                    break;
                }
            }

            if !changed {
                break;
            }
            overall = LogicResult::Changed;
        }

        Ok(if board.is_solved() {
            LogicResult::Solved
        } else {
            overall
        })
    }

    /// Evaluates every logical step on a clone, applies the best-scoring one
    /// to the real board, and returns its result.
    ///
    /// Steps are tried in their fixed order and scored by the configured
    /// [`ScoringPolicy`]; a step revealing a contradiction wins outright.
    /// Re-running the winner on the real board reproduces the clone's result
    /// exactly, so traces are deterministic.
    pub fn run_single_logical_step(&mut self, generate_description: bool) -> LogicalStepResult {
        let initial_remaining = self.board.unsolved_candidate_count();
        if initial_remaining == 0 {
            return LogicalStepResult::None;
        }

        // Clones run with the same description flag as the final application:
        // steps treat "no description" as brute-force mode and may scan
        // differently, and the applied step must reproduce the evaluated one.
        let mut evaluator = StepEvaluator::new(self.scoring, initial_remaining);
        for (index, step) in self.logical_solve_steps.iter().enumerate() {
            let mut clone = self.board.clone();
            match step.run(&mut clone, generate_description) {
                LogicalStepResult::None => continue,
                LogicalStepResult::Invalid(_) => {
                    evaluator.record_invalid(index);
                    break;
                }
                LogicalStepResult::Changed(_) => {
                    if evaluator.consider(index, step.difficulty(), &mut clone) {
                        break;
                    }
                }
            }
        }

        let Some(index) = evaluator.best_index() else {
            return LogicalStepResult::None;
        };

        let step = &self.logical_solve_steps[index];
        let result = step.run(&mut self.board, generate_description);
        if step.has_own_prefix() {
            result
        } else {
            result.with_prefix(&format!("{}: ", step.name()))
        }
    }

    /// Runs scored logical steps until the puzzle is solved, proven invalid,
    /// or no step applies. This mutates the solver's board.
    pub fn run_logical_solve(&mut self, cancellation: Option<Cancellation>) -> LogicalSolveResult {
        let mut desc_list = LogicalStepDescList::new();
        let mut changed = false;
        loop {
            if is_cancelled(&cancellation) {
                return LogicalSolveResult::Cancelled;
            }

            if self.board.is_solved() {
                desc_list.push("Solved!".into());
                return LogicalSolveResult::Solved(desc_list);
            }

            let step_result = self.run_single_logical_step(true);
            if step_result.is_none() {
                break;
            }

            changed = true;

            if let Some(desc) = step_result.description() {
                desc_list.push(desc.clone());
            }

            if step_result.is_invalid() {
                return LogicalSolveResult::Invalid(desc_list);
            }
        }

        if changed {
            LogicalSolveResult::Changed(desc_list)
        } else {
            LogicalSolveResult::None
        }
    }

    fn least_candidate_cell(&self, board: &Board, allow_bilocals: bool) -> Option<BranchTarget> {
        let mut best: Option<(CellIndex, usize)> = None;

        // Small houses constrain hardest; search them first, in ascending size.
        for house in board.small_houses() {
            let mut house_best: Option<(CellIndex, usize)> = None;
            for &cell in house.cells() {
                let mask = board.cell(cell);
                if mask.is_solved() {
                    continue;
                }
                let count = mask.count();
                if count == 2 {
                    return Some(BranchTarget::Cell(cell));
                }
                if house_best.map_or(true, |(_, best_count)| count < best_count) {
                    house_best = Some((cell, count));
                }
            }
            if house_best.is_some() {
                best = house_best;
                break;
            }
        }

        if best.is_none() {
            for cell in all_cells() {
                let mask = board.cell(cell);
                if mask.is_solved() {
                    continue;
                }
                let count = mask.count();
                if count == 2 {
                    return Some(BranchTarget::Cell(cell));
                }
                if best.map_or(true, |(_, best_count)| count < best_count) {
                    best = Some((cell, count));
                }
            }
        }

        let (cell, count) = best?;
        if count > 3 && allow_bilocals {
            if let Some(candidate) = Self::find_bilocal(board) {
                return Some(BranchTarget::Bilocal(candidate));
            }
        }
        Some(BranchTarget::Cell(cell))
    }

    /// A value with exactly two positions in some full house. Branching on
    /// one position being true or false covers both sub-problems.
    fn find_bilocal(board: &Board) -> Option<CandidateIndex> {
        for house in board.full_houses() {
            'value: for value in 1..=SIZE {
                let mut first: Option<CellIndex> = None;
                let mut count = 0;
                for &cell in house.cells() {
                    let mask = board.cell(cell);
                    if mask.is_solved() {
                        if mask.value() == value {
                            continue 'value;
                        }
                        continue;
                    }
                    if mask.has(value) {
                        count += 1;
                        if count > 2 {
                            continue 'value;
                        }
                        first.get_or_insert(cell);
                    }
                }
                if count == 2 {
                    return first.map(|cell| cell.candidate(value));
                }
            }
        }
        None
    }

    /// Pushes both branches of a target onto the search stack. The branch
    /// with the candidate placed lands on top, so it is explored first.
    fn push_branches(
        &self,
        mut board: Board,
        target: BranchTarget,
        stack: &mut Vec<Board>,
        rng: &mut Option<&mut dyn RngCore>,
    ) {
        let candidate = match target {
            BranchTarget::Cell(cell) => {
                let values = board.cell(cell).to_vec();
                let value = match rng {
                    Some(rng) => values.choose(&mut **rng).copied().unwrap_or(values[0]),
                    None => values[0],
                };
                cell.candidate(value)
            }
            BranchTarget::Bilocal(candidate) => candidate,
        };

        let (cell, value) = candidate.cell_index_and_value();
        let mut without = board.clone();
        if without.clear_value(cell, value) {
            stack.push(without);
        }
        if board.set_solved(cell, value) {
            stack.push(board);
        }
    }

    fn search_first(
        &self,
        cancellation: &Option<Cancellation>,
        mut rng: Option<&mut dyn RngCore>,
    ) -> SingleSolutionResult {
        let mut stack = vec![self.board.clone()];

        while let Some(mut board) = stack.pop() {
            match Self::propagate(&self.brute_force_steps, &mut board, cancellation) {
                Err(CancelledError) => {
                    return SingleSolutionResult::Error("Solve cancelled.".to_owned())
                }
                Ok(LogicResult::Invalid) => continue,
                Ok(_) => {}
            }

            if board.is_solved() {
                return SingleSolutionResult::Solved(Box::new(board));
            }

            let Some(target) = self.least_candidate_cell(&board, true) else {
                continue;
            };
            self.push_branches(board, target, &mut stack, &mut rng);
        }

        SingleSolutionResult::None
    }

    /// Finds the first solution found by deterministic depth-first search
    /// (values tried ascending). Not guaranteed to be the only solution.
    pub fn find_first_solution(&self, cancellation: Option<Cancellation>) -> SingleSolutionResult {
        self.search_first(&cancellation, None)
    }

    /// Finds a solution with the branching value chosen at random.
    pub fn find_random_solution(&self, cancellation: Option<Cancellation>) -> SingleSolutionResult {
        let mut rng = rand::thread_rng();
        self.search_first(&cancellation, Some(&mut rng))
    }

    /// Counts solutions up to `maximum` (0 means unbounded), optionally
    /// streaming each solution to a receiver.
    ///
    /// The reported count never exceeds the true solution count; it is exact
    /// unless the cap was reached or the receiver stopped the enumeration.
    pub fn find_solution_count(
        &self,
        maximum: usize,
        mut receiver: Option<&mut dyn SolutionReceiver>,
        cancellation: Option<Cancellation>,
    ) -> SolutionCountResult {
        let mut count = 0usize;
        let mut nodes = 0usize;
        let mut progress = 0usize;
        let mut stack = vec![self.board.clone()];

        while let Some(mut board) = stack.pop() {
            nodes += 1;
            if nodes % 8192 == 0 {
                if let Some(receiver) = receiver.as_mut() {
                    progress += 1;
                    receiver.progress_ping(progress);
                }
            }

            match Self::propagate(&self.brute_force_steps, &mut board, &cancellation) {
                Err(CancelledError) => {
                    return SolutionCountResult::Error("Solve cancelled.".to_owned())
                }
                Ok(LogicResult::Invalid) => continue,
                Ok(_) => {}
            }

            if board.is_solved() {
                count += 1;
                if let Some(receiver) = receiver.as_mut() {
                    if !receiver.receive(Box::new(board)) {
                        return SolutionCountResult::AtLeastCount(count);
                    }
                }
                if maximum > 0 && count >= maximum {
                    return SolutionCountResult::AtLeastCount(count);
                }
                continue;
            }

            let Some(target) = self.least_candidate_cell(&board, true) else {
                continue;
            };
            self.push_branches(board, target, &mut stack, &mut None);
        }

        SolutionCountResult::ExactCount(count)
    }

    /// Counts solutions with the first branch split across rayon workers.
    /// Each worker owns an independent board clone; only the running total is
    /// shared.
    pub fn find_solution_count_parallel(
        &self,
        maximum: usize,
        cancellation: Option<Cancellation>,
    ) -> SolutionCountResult {
        let mut root = self.board.clone();
        match Self::propagate(&self.brute_force_steps, &mut root, &cancellation) {
            Err(CancelledError) => {
                return SolutionCountResult::Error("Solve cancelled.".to_owned())
            }
            Ok(LogicResult::Invalid) => return SolutionCountResult::ExactCount(0),
            Ok(_) => {}
        }

        if root.is_solved() {
            return SolutionCountResult::ExactCount(1);
        }

        let Some(BranchTarget::Cell(cell)) = self.least_candidate_cell(&root, false) else {
            return SolutionCountResult::ExactCount(0);
        };

        let branches: Vec<Board> = root
            .cell(cell)
            .into_iter()
            .filter_map(|value| {
                let mut branch = root.clone();
                branch.set_solved(cell, value).then_some(branch)
            })
            .collect();

        let counter = AtomicUsize::new(0);
        let cancelled = AtomicBool::new(false);

        branches.into_par_iter().for_each(|board| {
            if self
                .count_into(board, maximum, &counter, &cancellation)
                .is_err()
            {
                cancelled.store(true, Ordering::Relaxed);
            }
        });

        if cancelled.load(Ordering::Relaxed) {
            return SolutionCountResult::Error("Solve cancelled.".to_owned());
        }

        let count = counter.load(Ordering::Relaxed);
        if maximum > 0 && count >= maximum {
            SolutionCountResult::AtLeastCount(maximum)
        } else {
            SolutionCountResult::ExactCount(count)
        }
    }

    fn count_into(
        &self,
        root: Board,
        maximum: usize,
        counter: &AtomicUsize,
        cancellation: &Option<Cancellation>,
    ) -> Result<(), CancelledError> {
        let mut stack = vec![root];

        while let Some(mut board) = stack.pop() {
            if maximum > 0 && counter.load(Ordering::Relaxed) >= maximum {
                return Ok(());
            }

            if Self::propagate(&self.brute_force_steps, &mut board, cancellation)? == LogicResult::Invalid {
                continue;
            }

            if board.is_solved() {
                counter.fetch_add(1, Ordering::Relaxed);
                continue;
            }

            let Some(target) = self.least_candidate_cell(&board, true) else {
                continue;
            };
            self.push_branches(board, target, &mut stack, &mut None);
        }

        Ok(())
    }

    fn with_board(&self, board: Board) -> Solver {
        let mut solver = self.clone();
        solver.board = board;
        solver
    }

    /// Reduces every cell to the candidates that appear in at least one
    /// solution.
    ///
    /// Each found solution marks all of its 81 candidates as true at once, so
    /// most candidates never need their own search.
    pub fn find_true_candidates(
        &self,
        cancellation: Option<Cancellation>,
    ) -> TrueCandidatesCountResult {
        let mut board = self.board.clone();
        match Self::propagate(&self.brute_force_steps, &mut board, &cancellation) {
            Err(CancelledError) => {
                return TrueCandidatesCountResult::Error("Solve cancelled.".to_owned())
            }
            Ok(LogicResult::Invalid) => return TrueCandidatesCountResult::None,
            Ok(_) => {}
        }

        let mut true_masks = vec![ValueMask::new(); NUM_CELLS];
        for cell in all_cells() {
            let mask = board.cell(cell);
            if mask.is_solved() {
                true_masks[cell.index()] = true_masks[cell.index()].with(mask.value());
                continue;
            }

            for value in mask {
                if true_masks[cell.index()].has(value) {
                    continue;
                }

                let mut test = board.clone();
                if !test.set_solved(cell, value) {
                    continue;
                }

                match self.with_board(test).search_first(&cancellation, None) {
                    SingleSolutionResult::Solved(solution) => {
                        for other in all_cells() {
                            let solved_value = solution.cell(other).value();
                            true_masks[other.index()] =
                                true_masks[other.index()].with(solved_value);
                        }
                    }
                    SingleSolutionResult::None => {}
                    SingleSolutionResult::Error(err) => {
                        return TrueCandidatesCountResult::Error(err)
                    }
                }
            }
        }

        Self::true_candidates_result(board, true_masks, Vec::new())
    }

    /// Like [`Solver::find_true_candidates`], but also counts the solutions
    /// through each candidate, capped at `max_count` per candidate.
    pub fn find_true_candidates_with_count(
        &self,
        max_count: usize,
        cancellation: Option<Cancellation>,
    ) -> TrueCandidatesCountResult {
        let mut board = self.board.clone();
        match Self::propagate(&self.brute_force_steps, &mut board, &cancellation) {
            Err(CancelledError) => {
                return TrueCandidatesCountResult::Error("Solve cancelled.".to_owned())
            }
            Ok(LogicResult::Invalid) => return TrueCandidatesCountResult::None,
            Ok(_) => {}
        }

        // Every solved cell's candidate passes through all remaining solutions.
        let board_count = match self
            .with_board(board.clone())
            .find_solution_count(max_count, None, cancellation.clone())
        {
            SolutionCountResult::Error(err) => return TrueCandidatesCountResult::Error(err),
            result => result.count().unwrap_or(0),
        };

        let mut true_masks = vec![ValueMask::new(); NUM_CELLS];
        let mut counts = vec![0usize; NUM_CANDIDATES];
        for cell in all_cells() {
            let mask = board.cell(cell);
            if mask.is_solved() {
                let value = mask.value();
                counts[cell.candidate(value).index()] = board_count;
                if board_count > 0 {
                    true_masks[cell.index()] = true_masks[cell.index()].with(value);
                }
                continue;
            }

            for value in mask {
                let mut test = board.clone();
                if !test.set_solved(cell, value) {
                    continue;
                }

                let result =
                    self.with_board(test)
                        .find_solution_count(max_count, None, cancellation.clone());
                match result {
                    SolutionCountResult::Error(err) => {
                        return TrueCandidatesCountResult::Error(err)
                    }
                    _ => {
                        let count = result.count().unwrap_or(0);
                        counts[cell.candidate(value).index()] = count;
                        if count > 0 {
                            true_masks[cell.index()] = true_masks[cell.index()].with(value);
                        }
                    }
                }
            }
        }

        Self::true_candidates_result(board, true_masks, counts)
    }

    fn true_candidates_result(
        board: Board,
        true_masks: Vec<ValueMask>,
        counts: Vec<usize>,
    ) -> TrueCandidatesCountResult {
        let mut result_board = board;
        for cell in all_cells() {
            if result_board.keep_mask(cell, true_masks[cell.index()]) == LogicResult::Invalid {
                return TrueCandidatesCountResult::None;
            }
        }

        if all_cells().all(|cell| result_board.cell(cell).is_single()) {
            TrueCandidatesCountResult::Solved(Box::new(result_board))
        } else {
            TrueCandidatesCountResult::Candidates(Box::new(result_board), counts)
        }
    }

    /// Whether every solution of this solver's puzzle is also a solution of
    /// `other`'s: `other`'s constraints (split to primitives) are a subset of
    /// this solver's, and every cell here is at least as restricted.
    ///
    /// The relation is reflexive and transitive; a `false` result makes no
    /// claim either way.
    pub fn is_inherit_of(&self, other: &Solver) -> bool {
        let self_hashes = Self::primitive_hashes(self.board.constraints());
        let other_hashes = Self::primitive_hashes(other.board.constraints());
        if !other_hashes.iter().all(|hash| self_hashes.contains(hash)) {
            return false;
        }

        all_cells().all(|cell| self.board.cell(cell).is_subset_of(other.board.cell(cell)))
    }

    fn primitive_hashes(constraints: &[Arc<dyn Constraint>]) -> HashSet<String> {
        let mut hashes = HashSet::new();
        for constraint in constraints {
            match constraint.split_to_primitives() {
                Some(primitives) => {
                    hashes.extend(primitives.iter().map(|p| p.constraint_hash()));
                }
                None => {
                    hashes.insert(constraint.constraint_hash());
                }
            }
        }
        hashes
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("board", &self.board.to_string())
            .field(
                "logical_solve_steps",
                &self.logical_solve_steps.iter().map(|s| s.name()).collect_vec(),
            )
            .field(
                "brute_force_steps",
                &self.brute_force_steps.iter().map(|s| s.name()).collect_vec(),
            )
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const CLASSIC_GIVENS: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const CLASSIC_SOLUTION: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    fn classic_solver() -> Solver {
        SolverBuilder::default()
            .with_givens_string(CLASSIC_GIVENS)
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_solution_empty_board() {
        let solver = SolverBuilder::default().build().unwrap();
        let result = solver.find_first_solution(None);
        assert!(result.is_solved());
        let board = result.board().unwrap();
        assert!(board.is_solved());
    }

    #[test]
    fn test_classic_puzzle_brute_force() {
        let solver = classic_solver();
        let result = solver.find_first_solution(None);
        assert!(result.is_solved());
        assert_eq!(result.board().unwrap().to_string(), CLASSIC_SOLUTION);

        let count = solver.find_solution_count(0, None, None);
        assert_eq!(count, SolutionCountResult::ExactCount(1));
    }

    #[test]
    fn test_classic_puzzle_logical() {
        let mut solver = classic_solver();
        let result = solver.run_logical_solve(None);
        assert!(result.is_solved());
        assert_eq!(solver.board().to_string(), CLASSIC_SOLUTION);
    }

    #[test]
    fn test_deterministic_traces() {
        let mut first = classic_solver();
        let mut second = classic_solver();
        let trace_a = first.run_logical_solve(None).to_string();
        let trace_b = second.run_logical_solve(None).to_string();
        assert_eq!(trace_a, trace_b);
        assert!(!trace_a.is_empty());
    }

    #[test]
    fn test_empty_board_count_cap() {
        let solver = SolverBuilder::default().build().unwrap();
        let result = solver.find_solution_count(2, None, None);
        assert_eq!(result.count(), Some(2));
    }

    #[test]
    fn test_count_parallel_matches() {
        let solver = classic_solver();
        let result = solver.find_solution_count_parallel(0, None);
        assert_eq!(result, SolutionCountResult::ExactCount(1));

        let empty = SolverBuilder::default().build().unwrap();
        assert_eq!(empty.find_solution_count_parallel(3, None).count(), Some(3));
    }

    #[test]
    fn test_random_solution() {
        let solver = SolverBuilder::default().build().unwrap();
        let result = solver.find_random_solution(None);
        assert!(result.is_solved());
        assert!(result.board().unwrap().is_solved());
    }

    #[test]
    fn test_cancellation() {
        let solver = SolverBuilder::default().build().unwrap();
        let result = solver.find_solution_count(0, None, Some(Cancellation::new(|| true)));
        assert!(result.is_error());
    }

    #[test]
    fn test_receiver_stops_early() {
        struct StopAfterOne {
            seen: usize,
        }
        impl SolutionReceiver for StopAfterOne {
            fn receive(&mut self, result: Box<Board>) -> bool {
                assert!(result.is_solved());
                self.seen += 1;
                false
            }
        }

        let solver = SolverBuilder::default().build().unwrap();
        let mut receiver = StopAfterOne { seen: 0 };
        let result = solver.find_solution_count(0, Some(&mut receiver), None);
        assert_eq!(result, SolutionCountResult::AtLeastCount(1));
        assert_eq!(receiver.seen, 1);
    }

    #[test]
    fn test_consolidate_idempotent() {
        let mut solver = classic_solver();
        let first = solver.consolidate();
        assert!(first.is_changed() || first.is_solved());
        let board_after = solver.board().clone();
        let second = solver.consolidate();
        assert!(second.is_none() || second.is_solved());
        assert_eq!(*solver.board(), board_after);
    }

    #[test]
    fn test_two_solution_puzzle() {
        // Blank an unavoidable rectangle of the classic solution: 8/6 in
        // r1c2/r1c7 and 6/8 in r2c2/r2c7, with both column pairs inside one
        // box. The two fillings are interchangeable, giving exactly two
        // solutions, and no deduction can separate them.
        let mut givens = CLASSIC_SOLUTION.to_owned();
        for index in [1, 6, 10, 15] {
            givens.replace_range(index..index + 1, ".");
        }
        let mut solver = SolverBuilder::default()
            .with_givens_string(&givens)
            .build()
            .unwrap();

        let count = solver.find_solution_count(0, None, None);
        assert_eq!(count, SolutionCountResult::ExactCount(2));

        let logical = solver.run_logical_solve(None);
        assert!(!logical.is_solved());
        assert!(!logical.is_invalid());
    }

    #[test]
    fn test_true_candidates_solved_puzzle() {
        let solver = classic_solver();
        let result = solver.find_true_candidates(None);
        assert!(result.is_solved() || result.is_candidates());
        let board = result.board().unwrap();
        assert_eq!(board.to_string(), CLASSIC_SOLUTION);
    }

    #[test]
    fn test_inherit_reflexive() {
        let solver = classic_solver();
        assert!(solver.is_inherit_of(&solver));

        let empty = SolverBuilder::default().build().unwrap();
        assert!(solver.is_inherit_of(&empty));
        assert!(!empty.is_inherit_of(&solver));
    }

    #[test]
    fn test_set_value_sound() {
        let mut solver = SolverBuilder::default().build().unwrap();
        let cell = CellIndex::from_rc(4, 4);
        assert!(solver.set_value(cell, 5));
        assert!(solver.consolidate() != LogicResult::Invalid);
        assert!(solver.board().cell(cell).is_solved());
        assert_eq!(solver.board().cell(cell).value(), 5);
    }
}
