//! Contains the [`SolverBuilder`] struct for building a [`Solver`].

use itertools::Itertools;
use std::sync::Arc;
use thiserror::Error;

use super::{Solver, SolverInfo};
use crate::prelude::*;

/// Ways building a solver can fail.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid regions: {0}")]
    InvalidRegions(String),
    #[error("invalid givens string: {0}")]
    InvalidGivens(String),
    #[error("cannot set given {value} in {cell}")]
    InvalidGiven { cell: CellIndex, value: usize },
    #[error("{constraint} has found the board is invalid: {reason}")]
    ConstraintInvalid { constraint: String, reason: String },
    #[error("the puzzle is invalid: {0}")]
    Invalid(String),
}

/// Assembles regions, givens, logical steps, and constraints into a
/// [`Solver`], finalizing the weak-link graph in the process.
///
/// # Example
/// ```
/// # use sudoku_engine::prelude::*;
/// let solver = SolverBuilder::default().build().unwrap();
/// assert_eq!(solver.board().houses().len(), 27);
/// ```
#[derive(Clone)]
pub struct SolverBuilder {
    regions: Vec<usize>,
    logical_steps: Vec<Arc<dyn LogicalStep>>,
    constraints: Vec<Arc<dyn Constraint>>,
    givens: Vec<(CellIndex, usize)>,
    givens_strings: Vec<String>,
    scoring: ScoringPolicy,
    discover_links: bool,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            logical_steps: Vec::new(),
            constraints: Vec::new(),
            givens: Vec::new(),
            givens_strings: Vec::new(),
            scoring: ScoringPolicy::default(),
            discover_links: false,
        }
    }

    /// Sets the region index of every cell. An empty vector (the default)
    /// means standard boxes; an all-equal vector means no box houses at all.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<usize>) -> Self {
        self.regions = regions;
        self
    }

    /// Removes the box houses, leaving rows and columns only.
    #[must_use]
    pub fn with_no_regions(mut self) -> Self {
        self.regions = vec![0; NUM_CELLS];
        self
    }

    /// Replaces the logical step list. The steps required by the solver are
    /// inserted automatically if missing.
    #[must_use]
    pub fn with_logical_steps(mut self, logical_steps: Vec<Arc<dyn LogicalStep>>) -> Self {
        self.logical_steps = logical_steps;
        self
    }

    /// Appends one logical step.
    #[must_use]
    pub fn with_logical_step(mut self, logical_step: Arc<dyn LogicalStep>) -> Self {
        self.logical_steps.push(logical_step);
        self
    }

    /// Replaces the constraint list.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Vec<Arc<dyn Constraint>>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Appends one constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: Arc<dyn Constraint>) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Appends one given value.
    #[must_use]
    pub fn with_given(mut self, cell: CellIndex, value: usize) -> Self {
        self.givens.push((cell, value));
        self
    }

    /// Appends multiple given values.
    #[must_use]
    pub fn with_givens(mut self, givens: &[(CellIndex, usize)]) -> Self {
        self.givens.extend_from_slice(givens);
        self
    }

    /// Appends givens from an 81-character string in row-major order; `0` or
    /// any non-digit is an empty cell.
    #[must_use]
    pub fn with_givens_string(mut self, givens: &str) -> Self {
        self.givens_strings.push(givens.to_owned());
        self
    }

    /// Overrides the logical-step scoring policy.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Enables speculative weak-link discovery during finalize. Off by
    /// default; it can be slow on heavily constrained boards.
    #[must_use]
    pub fn with_link_discovery(mut self, discover_links: bool) -> Self {
        self.discover_links = discover_links;
        self
    }

    fn standard_logic() -> Vec<Arc<dyn LogicalStep>> {
        vec![
            Arc::new(AllNakedSingles),
            Arc::new(NakedSingle),
            Arc::new(HiddenSingle),
            Arc::new(SimpleCellForcing),
            Arc::new(NakedTuples),
            Arc::new(Pointing),
            Arc::new(StepConstraints),
        ]
    }

    fn validated_regions(&self) -> Result<Vec<usize>, BuildError> {
        if self.regions.is_empty() {
            return Ok(default_regions());
        }

        if self.regions.len() != NUM_CELLS {
            return Err(BuildError::InvalidRegions(format!(
                "expected {} region entries, got {}",
                NUM_CELLS,
                self.regions.len()
            )));
        }

        // All-equal means "no regions"; anything else must split evenly.
        if !self.regions.iter().all_equal() {
            for &region in self.regions.iter().unique() {
                let count = self.regions.iter().filter(|&&r| r == region).count();
                if count != SIZE {
                    return Err(BuildError::InvalidRegions(format!(
                        "region {} covers {} cells, expected {}",
                        region, count, SIZE
                    )));
                }
            }
        }

        Ok(self.regions.clone())
    }

    fn parsed_givens(&self) -> Result<Vec<(CellIndex, usize)>, BuildError> {
        let mut givens = self.givens.clone();
        for string in &self.givens_strings {
            if string.chars().count() != NUM_CELLS {
                return Err(BuildError::InvalidGivens(format!(
                    "expected {} characters, got {}",
                    NUM_CELLS,
                    string.chars().count()
                )));
            }

            givens.extend(string.chars().enumerate().filter_map(|(i, c)| {
                let value = c.to_digit(10)?;
                if value == 0 {
                    None
                } else {
                    Some((CellIndex::new(i), value as usize))
                }
            }));
        }
        Ok(givens)
    }

    pub fn build(self) -> Result<Solver, BuildError> {
        let regions = self.validated_regions()?;
        let givens = self.parsed_givens()?;

        // Stable sort keeps registration order among equal sort keys.
        let constraints: Vec<Arc<dyn Constraint>> = self
            .constraints
            .iter()
            .cloned()
            .sorted_by_key(|constraint| constraint.sort_order())
            .collect();

        let mut board = Board::new(&regions, constraints);

        for (cell, value) in givens {
            let mask = board.cell(cell);
            if mask.is_solved() {
                if mask.value() != value {
                    return Err(BuildError::InvalidGiven { cell, value });
                }
                continue;
            }
            if !board.set_solved(cell, value) {
                return Err(BuildError::InvalidGiven { cell, value });
            }
        }

        // Let constraints narrow the initial candidates until quiescent.
        let constraint_list: Vec<Arc<dyn Constraint>> = board.constraints().to_vec();
        loop {
            let mut changed = false;
            for constraint in &constraint_list {
                match constraint.init_board(&mut board) {
                    LogicalStepResult::Invalid(desc) => {
                        return Err(BuildError::ConstraintInvalid {
                            constraint: constraint.specific_name(),
                            reason: desc
                                .map(|d| d.to_string())
                                .unwrap_or_else(|| "no placement is possible".to_owned()),
                        });
                    }
                    LogicalStepResult::Changed(_) => changed = true,
                    LogicalStepResult::None => {}
                }
            }
            if !changed {
                break;
            }
        }

        if self.discover_links && board.discover_weak_links() == LogicResult::Invalid {
            return Err(BuildError::Invalid(
                "weak link discovery emptied a cell".to_owned(),
            ));
        }

        let mut logical_steps = if self.logical_steps.is_empty() {
            Self::standard_logic()
        } else {
            self.logical_steps
        };

        // Two steps are required: AllNakedSingles drives the brute-force
        // solver and StepConstraints applies constraint logic.
        if !logical_steps.iter().any(|step| step.name() == AllNakedSingles.name()) {
            logical_steps.insert(0, Arc::new(AllNakedSingles));
        }
        if !logical_steps.iter().any(|step| step.name() == StepConstraints.name()) {
            logical_steps.push(Arc::new(StepConstraints));
        }

        let logical_solve_steps = logical_steps
            .iter()
            .filter(|step| step.is_active_during_logical_solves())
            .cloned()
            .collect();
        let brute_force_steps = logical_steps
            .iter()
            .filter(|step| step.is_active_during_brute_force_solves())
            .cloned()
            .collect();

        let info = SolverInfo::new(
            board
                .constraints()
                .iter()
                .map(|constraint| constraint.specific_name())
                .collect(),
        );

        Ok(Solver {
            board,
            logical_solve_steps,
            brute_force_steps,
            scoring: self.scoring,
            info,
        })
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::assert_equal;

    #[test]
    fn test_default_build() {
        let solver = SolverBuilder::default().build().unwrap();
        let board = solver.board();
        assert_eq!(board.solved_count(), 0);
        assert!(!board.is_solved());
        assert_eq!(board.houses().len(), 27);
        assert!(board.constraints().is_empty());
    }

    #[test]
    fn test_no_regions() {
        let solver = SolverBuilder::default().with_no_regions().build().unwrap();
        assert_eq!(solver.board().houses().len(), 18);
    }

    #[test]
    fn test_bad_regions() {
        let mut regions = default_regions();
        regions[0] = 1;
        assert!(matches!(
            SolverBuilder::default().with_regions(regions).build(),
            Err(BuildError::InvalidRegions(_))
        ));
    }

    #[test]
    fn test_conflicting_givens() {
        let result = SolverBuilder::default()
            .with_given(CellIndex::new(0), 1)
            .with_given(CellIndex::new(1), 1)
            .build();
        assert!(matches!(result, Err(BuildError::InvalidGiven { .. })));
    }

    #[test]
    fn test_required_logic() {
        let solver = SolverBuilder::new()
            .with_logical_step(Arc::new(HiddenSingle))
            .build()
            .unwrap();

        assert_equal(
            solver.brute_force_steps().iter().map(|s| s.name()),
            ["All Naked Singles", "Hidden Single", "Step Constraints"],
        );
        assert_equal(
            solver.logical_solve_steps().iter().map(|s| s.name()),
            ["Hidden Single", "Step Constraints"],
        );
    }

    #[test]
    fn test_link_discovery_on_plain_board() {
        let solver = SolverBuilder::default()
            .with_givens_string(
                "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
            )
            .with_link_discovery(true)
            .build()
            .unwrap();

        // Discovered links stay symmetric, sorted, and duplicate-free.
        let links = solver.board().weak_links();
        for candidate in all_candidates() {
            let list = links.links_for(candidate);
            assert!(list.windows(2).all(|w| w[0] < w[1]));
            for &other in list {
                assert!(links.is_linked(other, candidate));
            }
        }
    }
}
