//! A standard library of Sudoku variant constraints for the solving engine,
//! plus a [`crate::registry::ConstraintRegistry`] that constructs them from
//! name and option strings.

pub mod arrow_constraint;
pub mod chess_constraint;
pub mod extra_region_constraint;
pub mod killer_cage_constraint;
pub mod little_killer_constraint;
pub mod non_repeat_constraint;
pub mod prelude;
pub mod registry;
pub mod renban_constraint;
pub mod thermometer_constraint;
