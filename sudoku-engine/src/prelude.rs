//! Re-exports the types needed to build and run a solver.

pub use crate::board::{Board, BoardData};
pub use crate::candidate_index::{all_candidates, CandidateIndex};
pub use crate::cell_index::{all_cells, compact_name, parse_cell_groups, CellIndex};
pub use crate::constraint::Constraint;
pub use crate::elimination_list::EliminationList;
pub use crate::grid::{default_regions, BOX_SIZE, NUM_CANDIDATES, NUM_CELLS, SIZE};
pub use crate::house::House;
pub use crate::logic_result::LogicResult;
pub use crate::logical_step::all_naked_singles::AllNakedSingles;
pub use crate::logical_step::hidden_single::HiddenSingle;
pub use crate::logical_step::logical_step_desc::LogicalStepDesc;
pub use crate::logical_step::logical_step_desc_list::LogicalStepDescList;
pub use crate::logical_step::logical_step_result::LogicalStepResult;
pub use crate::logical_step::naked_single::NakedSingle;
pub use crate::logical_step::naked_tuples::NakedTuples;
pub use crate::logical_step::pointing::Pointing;
pub use crate::logical_step::simple_cell_forcing::SimpleCellForcing;
pub use crate::logical_step::step_constraints::StepConstraints;
pub use crate::logical_step::LogicalStep;
pub use crate::solver::cancellation::Cancellation;
pub use crate::solver::evaluator::ScoringPolicy;
pub use crate::solver::logical_solve_result::LogicalSolveResult;
pub use crate::solver::single_solution_result::SingleSolutionResult;
pub use crate::solver::solution_count_result::SolutionCountResult;
pub use crate::solver::solution_receiver::{
    CountSolutionReceiver, SolutionReceiver, VecSolutionReceiver,
};
pub use crate::solver::solver_builder::{BuildError, SolverBuilder};
pub use crate::solver::true_candidates_count_result::TrueCandidatesCountResult;
pub use crate::solver::{Solver, SolverInfo};
pub use crate::sum_helper::{SumCellsHelper, SumGroup};
pub use crate::value_mask::ValueMask;
pub use crate::weak_links::{nonrepeat_links, WeakLinks};
