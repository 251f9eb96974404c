//! An explicit name → factory table for constructing constraints from option
//! strings.
//!
//! Each entry owns a parser that validates its option string and produces the
//! constraint. Cell lists use the shared cell-group syntax of
//! [`parse_cell_groups`]; anything else is constraint-specific and documented
//! per entry.

use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::prelude::*;
use sudoku_engine::prelude::*;

/// Ways constructing a constraint from strings can fail.
#[derive(Debug, Error)]
pub enum ConstraintParseError {
    #[error("unknown constraint: {0}")]
    Unknown(String),
    #[error("invalid options for {constraint}: {reason}")]
    InvalidOptions {
        constraint: &'static str,
        reason: String,
    },
}

type Handler = fn(&str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError>;

/// Maps constraint names to their option parsers and factories.
///
/// # Example
/// ```
/// # use sudoku_variants::prelude::*;
/// let registry = ConstraintRegistry::standard();
/// let constraints = registry.create("killer-cage", "6:r1c1-3").unwrap();
/// assert_eq!(constraints.len(), 1);
/// assert!(registry.create("seven-segment", "").is_err());
/// ```
pub struct ConstraintRegistry {
    entries: BTreeMap<&'static str, Handler>,
}

impl ConstraintRegistry {
    /// A registry with every constraint in this crate registered:
    ///
    /// | name | options |
    /// |---|---|
    /// | `killer-cage` | `sum:cells` or `cells` |
    /// | `little-killer` | `sum:cells` |
    /// | `arrow` | `circle;shaft` |
    /// | `thermometer` | `cells` (bulb first) |
    /// | `renban` | `cells` |
    /// | `extra-region` | `cells` (nine of them) |
    /// | `diagonal+` / `diagonal-` | none |
    /// | `anti-knight` / `anti-king` / `anti-camel` | none |
    /// | `anti-taxicab` | distance |
    pub fn standard() -> Self {
        let mut entries: BTreeMap<&'static str, Handler> = BTreeMap::new();
        entries.insert("killer-cage", parse_killer_cage);
        entries.insert("little-killer", parse_little_killer);
        entries.insert("arrow", parse_arrow);
        entries.insert("thermometer", parse_thermometer);
        entries.insert("renban", parse_renban);
        entries.insert("extra-region", parse_extra_region);
        entries.insert("diagonal+", parse_diagonal_positive);
        entries.insert("diagonal-", parse_diagonal_negative);
        entries.insert("anti-knight", parse_anti_knight);
        entries.insert("anti-king", parse_anti_king);
        entries.insert("anti-camel", parse_anti_camel);
        entries.insert("anti-taxicab", parse_anti_taxicab);
        Self { entries }
    }

    /// The registered constraint names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Constructs the constraints for `name` from its option string.
    pub fn create(
        &self,
        name: &str,
        options: &str,
    ) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
        let handler = self
            .entries
            .get(name)
            .ok_or_else(|| ConstraintParseError::Unknown(name.to_owned()))?;
        handler(options)
    }
}

fn invalid(constraint: &'static str, reason: impl Into<String>) -> ConstraintParseError {
    ConstraintParseError::InvalidOptions {
        constraint,
        reason: reason.into(),
    }
}

fn cell_groups(
    constraint: &'static str,
    options: &str,
) -> Result<Vec<Vec<CellIndex>>, ConstraintParseError> {
    parse_cell_groups(options).map_err(|reason| invalid(constraint, reason))
}

fn single_group(
    constraint: &'static str,
    options: &str,
) -> Result<Vec<CellIndex>, ConstraintParseError> {
    let mut groups = cell_groups(constraint, options)?;
    if groups.len() != 1 || groups[0].is_empty() {
        return Err(invalid(constraint, "expected a single group of cells"));
    }
    Ok(groups.remove(0))
}

fn sum_and_cells(
    constraint: &'static str,
    options: &str,
) -> Result<(usize, Vec<CellIndex>), ConstraintParseError> {
    let (sum, cells) = options
        .split_once(':')
        .ok_or_else(|| invalid(constraint, "expected sum:cells"))?;
    let sum = sum
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(constraint, format!("invalid sum: {}", sum)))?;
    Ok((sum, single_group(constraint, cells)?))
}

fn parse_killer_cage(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    let (sum, cells) = if options.contains(':') {
        let (sum, cells) = sum_and_cells("killer-cage", options)?;
        (Some(sum), cells)
    } else {
        (None, single_group("killer-cage", options)?)
    };

    if cells.len() > SIZE {
        return Err(invalid("killer-cage", "a cage cannot exceed nine cells"));
    }
    Ok(vec![Arc::new(KillerCageConstraint::new(cells, sum))])
}

fn parse_little_killer(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    let (sum, cells) = sum_and_cells("little-killer", options)?;
    Ok(vec![Arc::new(LittleKillerConstraint::new(cells, sum))])
}

fn parse_arrow(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    let groups = cell_groups("arrow", options)?;
    if groups.len() != 2 || groups[0].len() != 1 || groups[1].is_empty() {
        return Err(invalid("arrow", "expected circle;shaft"));
    }
    Ok(vec![Arc::new(ArrowConstraint::new(
        groups[0][0],
        groups[1].clone(),
    ))])
}

fn parse_thermometer(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    let cells = single_group("thermometer", options)?;
    if cells.len() < 2 || cells.len() > SIZE {
        return Err(invalid(
            "thermometer",
            "expected between two and nine cells",
        ));
    }
    Ok(vec![Arc::new(ThermometerConstraint::new(cells))])
}

fn parse_renban(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    let cells = single_group("renban", options)?;
    if cells.len() < 2 || cells.len() > SIZE {
        return Err(invalid("renban", "expected between two and nine cells"));
    }
    Ok(vec![Arc::new(RenbanConstraint::new(cells))])
}

fn parse_extra_region(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    let cells = single_group("extra-region", options)?;
    if cells.len() != SIZE {
        return Err(invalid("extra-region", "expected exactly nine cells"));
    }
    Ok(vec![Arc::new(ExtraRegionConstraint::new(cells))])
}

fn parse_diagonal_positive(
    options: &str,
) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    expect_no_options("diagonal+", options)?;
    Ok(vec![Arc::new(NonRepeatConstraint::from_positive_diagonal())])
}

fn parse_diagonal_negative(
    options: &str,
) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    expect_no_options("diagonal-", options)?;
    Ok(vec![Arc::new(NonRepeatConstraint::from_negative_diagonal())])
}

fn parse_anti_knight(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    expect_no_options("anti-knight", options)?;
    Ok(vec![Arc::new(ChessConstraint::anti_knight())])
}

fn parse_anti_king(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    expect_no_options("anti-king", options)?;
    Ok(vec![Arc::new(ChessConstraint::anti_king())])
}

fn parse_anti_camel(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    expect_no_options("anti-camel", options)?;
    Ok(vec![Arc::new(ChessConstraint::anti_camel())])
}

fn parse_anti_taxicab(options: &str) -> Result<Vec<Arc<dyn Constraint>>, ConstraintParseError> {
    let distance = options
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid("anti-taxicab", format!("invalid distance: {}", options)))?;
    if distance == 0 || distance >= 2 * SIZE {
        return Err(invalid("anti-taxicab", "distance out of range"));
    }
    Ok(vec![Arc::new(ChessConstraint::anti_taxicab(distance))])
}

fn expect_no_options(
    constraint: &'static str,
    options: &str,
) -> Result<(), ConstraintParseError> {
    if options.trim().is_empty() {
        Ok(())
    } else {
        Err(invalid(constraint, "takes no options"))
    }
}
