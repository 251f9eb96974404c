//! Re-exports every constraint and the registry.

pub use crate::arrow_constraint::ArrowConstraint;
pub use crate::chess_constraint::ChessConstraint;
pub use crate::extra_region_constraint::ExtraRegionConstraint;
pub use crate::killer_cage_constraint::KillerCageConstraint;
pub use crate::little_killer_constraint::LittleKillerConstraint;
pub use crate::non_repeat_constraint::NonRepeatConstraint;
pub use crate::registry::{ConstraintParseError, ConstraintRegistry};
pub use crate::renban_constraint::RenbanConstraint;
pub use crate::thermometer_constraint::ThermometerConstraint;
