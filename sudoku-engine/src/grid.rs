//! Fixed grid parameters and region layout.
//!
//! The engine is specialized to a classic 9x9 grid with 3x3 boxes. All grid
//! parameters are compile-time constants rather than runtime values, which
//! keeps cell and candidate indices free of any carried size.

/// Number of rows, columns, and values.
pub const SIZE: usize = 9;

/// Width and height of a box.
pub const BOX_SIZE: usize = 3;

/// Total cell count.
pub const NUM_CELLS: usize = SIZE * SIZE;

/// Total candidate count (one per cell and value).
pub const NUM_CANDIDATES: usize = NUM_CELLS * SIZE;

/// Returns the default region assignment for every cell: a flat list of which
/// box index each cell belongs to, in row-major order.
///
/// # Example
/// ```
/// # use sudoku_engine::grid::default_regions;
/// let regions = default_regions();
/// assert_eq!(regions.len(), 81);
/// assert_eq!(regions[0], 0);
/// assert_eq!(regions[8], 2);
/// assert_eq!(regions[80], 8);
/// ```
pub fn default_regions() -> Vec<usize> {
    let mut regions = Vec::with_capacity(NUM_CELLS);
    for row in 0..SIZE {
        for col in 0..SIZE {
            regions.push((row / BOX_SIZE) * BOX_SIZE + col / BOX_SIZE);
        }
    }
    regions
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_regions() {
        let regions = default_regions();
        assert_eq!(regions.len(), NUM_CELLS);
        for region in 0..SIZE {
            assert_eq!(regions.iter().filter(|&&r| r == region).count(), SIZE);
        }
        assert_eq!(
            &regions[..27],
            &[
                0, 0, 0, 1, 1, 1, 2, 2, 2, //
                0, 0, 0, 1, 1, 1, 2, 2, 2, //
                0, 0, 0, 1, 1, 1, 2, 2, 2,
            ]
        );
    }
}
