//! Contains [`CellIndex`] plus parsing and naming helpers for sets of cells.

use crate::candidate_index::CandidateIndex;
use crate::grid::{BOX_SIZE, NUM_CELLS, SIZE};
use itertools::Itertools;

/// The location of a cell on the board, indexed 0 to 80 in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(usize);

impl CellIndex {
    /// Creates a new instance from a linear index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Creates a new instance from a row and column index.
    pub const fn from_rc(row: usize, column: usize) -> Self {
        Self(row * SIZE + column)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn row(self) -> usize {
        self.0 / SIZE
    }

    pub const fn column(self) -> usize {
        self.0 % SIZE
    }

    pub const fn rc(self) -> (usize, usize) {
        (self.row(), self.column())
    }

    /// The box this cell belongs to in the default region layout.
    pub const fn box_index(self) -> usize {
        (self.row() / BOX_SIZE) * BOX_SIZE + self.column() / BOX_SIZE
    }

    /// The [`CandidateIndex`] of a value in this cell.
    pub const fn candidate(self, value: usize) -> CandidateIndex {
        CandidateIndex::from_cv(self, value)
    }

    /// The cell at the given offset, or `None` when it falls off the grid.
    ///
    /// # Example
    /// ```
    /// # use sudoku_engine::cell_index::CellIndex;
    /// let cell = CellIndex::from_rc(0, 4);
    /// assert_eq!(cell.offset(1, -2), Some(CellIndex::from_rc(1, 2)));
    /// assert_eq!(cell.offset(-1, 0), None);
    /// ```
    pub fn offset(self, row_offset: isize, column_offset: isize) -> Option<CellIndex> {
        let row = self.row() as isize + row_offset;
        let column = self.column() as isize + column_offset;
        if row < 0 || row >= SIZE as isize || column < 0 || column >= SIZE as isize {
            None
        } else {
            Some(CellIndex::from_rc(row as usize, column as usize))
        }
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.column() + 1)
    }
}

/// Iterates every cell of the board in row-major order.
pub fn all_cells() -> impl Iterator<Item = CellIndex> {
    (0..NUM_CELLS).map(CellIndex::new)
}

/// Parses a string into a list of groups of cells.
///
/// Groups are separated by semi-colons. Within a group, sub-groups can be a
/// single cell, a run of cells, a range, a disjoint range, or a starting cell
/// followed by numpad directions:
/// * `r2c3` - a single cell
/// * `r2c3r4c5` - two cells
/// * `r1-4c5` - rows 1 to 4 of column 5
/// * `r1,3,5c5` - rows 1, 3, and 5 of column 5
/// * `r2-4c3-6` - a 3x4 rectangle
/// * `r1c1d2229` - a starting cell extended by numpad steps (2=down, 9=up-right, ...)
///
/// # Example
/// ```
/// # use sudoku_engine::cell_index::{parse_cell_groups, CellIndex};
/// let groups = parse_cell_groups("r2c3;r3c4r4c5").unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0], vec![CellIndex::from_rc(1, 2)]);
/// assert_eq!(groups[1], vec![CellIndex::from_rc(2, 3), CellIndex::from_rc(3, 4)]);
/// ```
pub fn parse_cell_groups(cell_string: &str) -> Result<Vec<Vec<CellIndex>>, String> {
    let mut result = Vec::new();

    for cell_group in cell_string.split(';').map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if !cell_group.is_ascii() {
            return Err(format!("Invalid cell group (invalid characters): {}", cell_group));
        }

        let err_msg = format!("Invalid cell group: {}", cell_group);
        let cell_group = cell_group.to_ascii_lowercase();
        let cell_group = cell_group.as_bytes();

        if cell_group.len() < 4 || cell_group[0] != b'r' {
            return Err(err_msg);
        }

        let mut cells = Vec::new();
        let mut rows: Vec<usize> = Vec::new();
        let mut cols: Vec<usize> = Vec::new();
        let mut adding_rows = true;
        let mut value_start = true;
        let mut last_added_directions = false;
        let mut cur_val_start = 0;
        let mut cur_val_end = 0;
        let mut i = 1;
        while i < cell_group.len() {
            last_added_directions = false;

            let cur_char = cell_group[i];
            match cur_char {
                b'r' => {
                    if adding_rows
                        || add_range(&mut cols, cur_val_start, cur_val_end).is_err()
                        || add_cells(&mut cells, &rows, &cols).is_err()
                    {
                        return Err(err_msg);
                    }
                    rows.clear();
                    cols.clear();
                    adding_rows = true;
                    value_start = true;
                    cur_val_start = 0;
                    cur_val_end = 0;
                }
                b'c' => {
                    if !adding_rows || add_range(&mut rows, cur_val_start, cur_val_end).is_err() {
                        return Err(err_msg);
                    }
                    adding_rows = false;
                    value_start = true;
                    cur_val_start = 0;
                    cur_val_end = 0;
                }
                b'd' => {
                    if adding_rows
                        || add_range(&mut cols, cur_val_start, cur_val_end).is_err()
                        || add_cells(&mut cells, &rows, &cols).is_err()
                        || cells.is_empty()
                    {
                        return Err(err_msg);
                    }
                    rows.clear();
                    cols.clear();
                    adding_rows = true;
                    value_start = true;
                    cur_val_start = 0;
                    cur_val_end = 0;

                    i += 1;
                    let mut complete = false;
                    while i < cell_group.len() && !complete {
                        let cell = cells[cells.len() - 1];
                        let dir_char = cell_group[i];
                        let step = match dir_char {
                            b'1' => Some((1, -1)),
                            b'2' => Some((1, 0)),
                            b'3' => Some((1, 1)),
                            b'4' => Some((0, -1)),
                            b'5' => Some((0, 0)),
                            b'6' => Some((0, 1)),
                            b'7' => Some((-1, -1)),
                            b'8' => Some((-1, 0)),
                            b'9' => Some((-1, 1)),
                            b'r' => {
                                complete = true;
                                None
                            }
                            _ => return Err(err_msg),
                        };
                        if let Some((dr, dc)) = step {
                            match cell.offset(dr, dc) {
                                Some(next) => cells.push(next),
                                None => return Err(err_msg),
                            }
                            last_added_directions = true;
                            i += 1;
                        }
                    }
                    i -= 1;
                }
                b'0'..=b'9' => {
                    if value_start {
                        cur_val_start = cur_val_start * 10 + (cur_char - b'0') as usize;
                    } else {
                        cur_val_end = cur_val_end * 10 + (cur_char - b'0') as usize;
                    }
                }
                b'-' => {
                    if !value_start {
                        return Err(err_msg);
                    }
                    value_start = false;
                }
                b',' => {
                    let list = if adding_rows { &mut rows } else { &mut cols };
                    if add_range(list, cur_val_start, cur_val_end).is_err() {
                        return Err(err_msg);
                    }
                    value_start = true;
                    cur_val_start = 0;
                    cur_val_end = 0;
                }
                _ => return Err(err_msg),
            }

            i += 1;
        }

        if !last_added_directions
            && (adding_rows
                || add_range(&mut cols, cur_val_start, cur_val_end).is_err()
                || add_cells(&mut cells, &rows, &cols).is_err()
                || cells.is_empty())
        {
            return Err(err_msg);
        }

        result.push(cells);
    }

    Ok(result)
}

// Used by parse_cell_groups
fn add_range(list: &mut Vec<usize>, start: usize, end: usize) -> Result<(), ()> {
    if start == 0 {
        return Err(());
    }

    if end == 0 {
        list.push(start);
    } else {
        let low = usize::min(start, end);
        let high = usize::max(start, end);
        for i in low..=high {
            list.push(i);
        }
    }

    Ok(())
}

// Used by parse_cell_groups
fn add_cells(list: &mut Vec<CellIndex>, rows: &[usize], cols: &[usize]) -> Result<(), ()> {
    for &r in rows {
        for &c in cols {
            if r == 0 || c == 0 || r > SIZE || c > SIZE {
                return Err(());
            }
            list.push(CellIndex::from_rc(r - 1, c - 1));
        }
    }

    Ok(())
}

/// Generates a compact description of a group of cells.
///
/// Cells that share a row compress to forms like `r1c123`, cells that share a
/// column to `r123c1`, and mixed sets to whichever of the row-grouped or
/// column-grouped renderings is shorter.
///
/// # Example
/// ```
/// # use sudoku_engine::cell_index::{compact_name, CellIndex};
/// let cells = [CellIndex::from_rc(0, 0), CellIndex::from_rc(0, 1), CellIndex::from_rc(0, 2)];
/// assert_eq!(compact_name(&cells), "r1c123");
/// ```
pub fn compact_name(cells: &[CellIndex]) -> String {
    if cells.is_empty() {
        return String::new();
    }

    if cells.len() == 1 {
        return cells[0].to_string();
    }

    let cells: Vec<(usize, usize)> = cells.iter().sorted().map(|cell| cell.rc()).collect();

    let first_row = cells[0].0;
    if cells.iter().all(|cell| cell.0 == first_row) {
        return format!(
            "r{}c{}",
            first_row + 1,
            cells.iter().map(|cell| cell.1 + 1).sorted().join("")
        );
    }

    let first_col = cells[0].1;
    if cells.iter().all(|cell| cell.1 == first_col) {
        return format!(
            "r{}c{}",
            cells.iter().map(|cell| cell.0 + 1).sorted().join(""),
            first_col + 1
        );
    }

    let grouped_by_row = compact_name_grouped(&cells, false);
    let grouped_by_col = compact_name_grouped(&cells, true);

    if grouped_by_row.len() < grouped_by_col.len() {
        grouped_by_row
    } else {
        grouped_by_col
    }
}

// Used by compact_name. Groups cells by their first coordinate (rows) or,
// with `by_col`, by their second (columns), merging equal groups.
fn compact_name_grouped(cells: &[(usize, usize)], by_col: bool) -> String {
    let mut other_per_key: Vec<Vec<usize>> = vec![vec![]; SIZE];
    for &(r, c) in cells {
        let (key, other) = if by_col { (c, r) } else { (r, c) };
        other_per_key[key].push(other + 1);
    }
    for list in other_per_key.iter_mut() {
        list.sort();
    }

    let mut groups: Vec<String> = Vec::new();
    for i in 0..SIZE {
        if other_per_key[i].is_empty() {
            continue;
        }

        let mut keys_in_group: Vec<usize> = vec![i + 1];
        for j in i + 1..SIZE {
            if other_per_key[j] == other_per_key[i] {
                keys_in_group.push(j + 1);
                other_per_key[j].clear();
            }
        }

        let (rows, cols) = if by_col {
            (other_per_key[i].iter().join(""), keys_in_group.iter().join(""))
        } else {
            (keys_in_group.iter().join(""), other_per_key[i].iter().join(""))
        };
        groups.push(format!("r{}c{}", rows, cols));
    }

    groups.join(",")
}

#[cfg(test)]
mod test {
    use super::*;

    fn cell(r: usize, c: usize) -> CellIndex {
        CellIndex::from_rc(r, c)
    }

    #[test]
    fn test_cell_index() {
        assert_eq!(cell(0, 0).index(), 0);
        assert_eq!(cell(4, 4).index(), 40);
        assert_eq!(cell(8, 8).index(), 80);
        assert_eq!(CellIndex::new(40).rc(), (4, 4));
        assert_eq!(cell(0, 0).box_index(), 0);
        assert_eq!(cell(4, 4).box_index(), 4);
        assert_eq!(cell(8, 0).box_index(), 6);
        assert_eq!(cell(0, 0).to_string(), "r1c1");
        assert_eq!(cell(8, 8).to_string(), "r9c9");
    }

    #[test]
    fn test_parse_cell_groups() {
        assert_eq!(parse_cell_groups(""), Ok(vec![]));
        assert_eq!(parse_cell_groups("r1c1"), Ok(vec![vec![cell(0, 0)]]));
        assert_eq!(parse_cell_groups("R2C3"), Ok(vec![vec![cell(1, 2)]]));
        assert_eq!(
            parse_cell_groups("r1-3c1-2"),
            Ok(vec![vec![
                cell(0, 0),
                cell(0, 1),
                cell(1, 0),
                cell(1, 1),
                cell(2, 0),
                cell(2, 1)
            ]])
        );
        assert_eq!(
            parse_cell_groups("r1c1r2c2"),
            Ok(vec![vec![cell(0, 0), cell(1, 1)]])
        );
        assert_eq!(
            parse_cell_groups("r1c1d222"),
            Ok(vec![vec![cell(0, 0), cell(1, 0), cell(2, 0), cell(3, 0)]])
        );
        assert_eq!(
            parse_cell_groups("r1,3c1-2"),
            Ok(vec![vec![cell(0, 0), cell(0, 1), cell(2, 0), cell(2, 1)]])
        );
        assert_eq!(
            parse_cell_groups("r1c1;r2c2"),
            Ok(vec![vec![cell(0, 0)], vec![cell(1, 1)]])
        );
        assert!(parse_cell_groups("x").is_err());
        assert!(parse_cell_groups("x1c1").is_err());
        assert!(parse_cell_groups("r0c1").is_err());
        assert!(parse_cell_groups("r1c1d88").is_err());
        assert!(parse_cell_groups("r1-10c1").is_err());
    }

    #[test]
    fn test_compact_name() {
        assert_eq!(compact_name(&[]), "");
        assert_eq!(compact_name(&[cell(0, 0)]), "r1c1");
        assert_eq!(compact_name(&[cell(0, 0), cell(0, 1), cell(0, 2)]), "r1c123");
        assert_eq!(compact_name(&[cell(0, 0), cell(1, 0), cell(2, 0)]), "r123c1");
        assert_eq!(
            compact_name(&[cell(0, 0), cell(1, 1), cell(2, 2)]),
            "r1c1,r2c2,r3c3"
        );
        assert_eq!(
            compact_name(&[cell(0, 0), cell(0, 1), cell(1, 0), cell(1, 1)]),
            "r12c12"
        );
    }
}
