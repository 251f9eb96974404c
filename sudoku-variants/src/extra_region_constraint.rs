//! Contains the [`ExtraRegionConstraint`] struct for extra nine-cell regions.

use sudoku_engine::prelude::*;

/// A [`Constraint`] adding an extra nine-cell region: the cells form a house
/// and therefore contain every digit exactly once.
#[derive(Debug)]
pub struct ExtraRegionConstraint {
    specific_name: String,
    cells: Vec<CellIndex>,
}

impl ExtraRegionConstraint {
    pub fn new(cells: Vec<CellIndex>) -> Self {
        let specific_name = format!("Extra Region at {}", compact_name(&cells));
        Self {
            specific_name,
            cells,
        }
    }
}

impl Constraint for ExtraRegionConstraint {
    fn name(&self) -> &str {
        "Extra Region"
    }

    fn specific_name(&self) -> String {
        self.specific_name.clone()
    }

    fn get_houses(&self) -> Vec<House> {
        vec![House::new(&self.specific_name, &self.cells)]
    }

    fn constraint_hash(&self) -> String {
        format!("ExtraRegion:{}", compact_name(&self.cells))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_extra_region_house() {
        let cells: Vec<CellIndex> = parse_cell_groups("r1-3c1-3")
            .unwrap()
            .into_iter()
            .next()
            .unwrap();
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(ExtraRegionConstraint::new(cells)))
            .build()
            .unwrap();

        // The region duplicates box 1, so no house is added twice.
        assert_eq!(solver.board().houses().len(), 27);
    }

    #[test]
    fn test_extra_region_links() {
        let cells: Vec<CellIndex> = parse_cell_groups("r1c1-3r2c1-3r3c4-6")
            .unwrap()
            .into_iter()
            .next()
            .unwrap();
        let solver = SolverBuilder::default()
            .with_constraint(Arc::new(ExtraRegionConstraint::new(cells.clone())))
            .build()
            .unwrap();

        assert_eq!(solver.board().houses().len(), 28);
        assert!(solver.board().is_grouped(&cells));
    }
}
