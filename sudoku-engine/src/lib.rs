//! Core engine for solving Sudoku puzzles with variant constraints.
//!
//! The [`crate::solver::Solver`] struct is the main entry point. It owns a
//! [`crate::board::Board`] holding the candidate state of the puzzle, a weak-link
//! graph relating candidates that cannot both be true, and the list of
//! [`crate::logical_step::LogicalStep`] deductions used for both human-style
//! logical solving and brute-force propagation.
//!
//! Variant rules are supplied through the [`crate::constraint::Constraint`]
//! trait. This crate provides no constraint implementations itself; see the
//! companion constraints crate for a standard library of them.
//!
//! Solvers are constructed through [`crate::solver::solver_builder::SolverBuilder`],
//! which finalizes the weak-link graph before any solving is allowed.

pub mod board;
pub mod candidate_index;
pub mod cell_index;
pub mod constraint;
pub mod elimination_list;
pub mod grid;
pub mod house;
pub mod logic_result;
pub mod logical_step;
pub mod prelude;
pub mod solver;
pub mod sum_helper;
pub mod value_mask;
pub mod weak_links;
