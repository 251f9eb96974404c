//! Contains [`House`] for representing a named group of mutually-distinct cells.

use crate::cell_index::CellIndex;

/// A *house* is a group of cells within which digits cannot repeat.
///
/// A full house of nine cells additionally contains every digit exactly once.
///
/// Examples of houses:
///  - A row, column, or box
///  - An "extra region"
///  - A killer cage or renban of nine cells
#[derive(Debug, Clone)]
pub struct House {
    name: String,
    cells: Vec<CellIndex>,
}

impl House {
    /// Create a new house with the given name and cells. Cells are stored sorted.
    pub fn new(name: &str, cells: &[CellIndex]) -> House {
        let mut cells = cells.to_vec();
        cells.sort();

        House {
            name: name.to_string(),
            cells,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }
}

impl std::fmt::Display for House {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
