//! Contains [`Board`] which holds the candidate state of a puzzle, plus
//! [`BoardData`], the immutable metadata shared by all of its clones.

use bitvec::bitvec;
use bitvec::vec::BitVec;
use itertools::Itertools;

use crate::prelude::*;
use crate::sum_helper::SumMemo;
use std::{collections::HashMap, sync::Arc};

/// The candidate state of a puzzle.
///
/// The houses, weak-link graph, exclusivity table, and constraints live in
/// [`BoardData`] behind an `Arc`; they are immutable once the solver is built,
/// so cloning a board copies only the 81 cell masks, the solved count, and the
/// sum memo cache. Clones therefore never observe each other's mutations.
#[derive(Clone)]
pub struct Board {
    cells: Vec<ValueMask>,
    solved_count: usize,
    data: Arc<BoardData>,
    memo: SumMemo,
}

/// Metadata about the board: houses, the weak-link graph, the cell
/// exclusivity table, and the constraints. Immutable after solver
/// construction.
#[derive(Clone)]
pub struct BoardData {
    houses: Vec<Arc<House>>,
    houses_by_cell: Vec<Vec<Arc<House>>>,
    full_houses: Vec<Arc<House>>,
    small_houses: Vec<Arc<House>>,
    weak_links: WeakLinks,
    exclusive_cells: Vec<BitVec>,
    constraints: Vec<Arc<dyn Constraint>>,
}

impl Board {
    /// Creates a board with all candidates present, the weak-link graph
    /// initialized from houses and constraints, and any constraint-reported
    /// impossible candidates already cleared.
    pub fn new(regions: &[usize], constraints: Vec<Arc<dyn Constraint>>) -> Board {
        let mut data = BoardData::new(regions, constraints);
        let elims = data.init_weak_links();

        let mut board = Board {
            cells: vec![ValueMask::all(); NUM_CELLS],
            solved_count: 0,
            data: Arc::new(data),
            memo: SumMemo::default(),
        };

        board.clear_candidates(elims.into_iter());

        board
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    pub fn is_solved(&self) -> bool {
        self.solved_count == NUM_CELLS
    }

    pub fn data(&self) -> Arc<BoardData> {
        self.data.clone()
    }

    pub fn houses(&self) -> &[Arc<House>] {
        &self.data.houses
    }

    pub fn houses_for_cell(&self, cell: CellIndex) -> &[Arc<House>] {
        &self.data.houses_by_cell[cell.index()]
    }

    /// Houses of exactly nine cells, which must contain every digit.
    pub fn full_houses(&self) -> &[Arc<House>] {
        &self.data.full_houses
    }

    /// Houses of fewer than nine cells, ascending by size.
    pub fn small_houses(&self) -> &[Arc<House>] {
        &self.data.small_houses
    }

    pub fn weak_links(&self) -> &WeakLinks {
        &self.data.weak_links
    }

    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.data.constraints
    }

    pub fn cell(&self, cell: CellIndex) -> ValueMask {
        self.cells[cell.index()]
    }

    pub fn all_cell_masks(&self) -> impl Iterator<Item = (CellIndex, ValueMask)> + '_ {
        all_cells().map(move |cell| (cell, self.cell(cell)))
    }

    pub fn has_candidate(&self, candidate: CandidateIndex) -> bool {
        let (cell, value) = candidate.cell_index_and_value();
        self.cell(cell).has(value)
    }

    /// Total candidates remaining over all unsolved cells.
    pub fn unsolved_candidate_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|mask| !mask.is_solved())
            .map(|mask| mask.count())
            .sum()
    }

    /// Removes a value from a cell. Returns false iff the cell ran out of
    /// candidates.
    pub fn clear_value(&mut self, cell: CellIndex, value: usize) -> bool {
        let index = cell.index();
        self.cells[index] = self.cells[index].without(value);
        !self.cells[index].is_empty()
    }

    pub fn clear_candidate(&mut self, candidate: CandidateIndex) -> bool {
        let (cell, value) = candidate.cell_index_and_value();
        self.clear_value(cell, value)
    }

    pub fn clear_candidates(&mut self, candidates: impl Iterator<Item = CandidateIndex>) -> bool {
        let mut valid = true;
        for candidate in candidates {
            if !self.clear_candidate(candidate) {
                valid = false;
            }
        }
        valid
    }

    /// Restricts a cell to the candidates of `mask`.
    pub fn keep_mask(&mut self, cell: CellIndex, mask: ValueMask) -> LogicResult {
        let current = self.cell(cell);
        if current.is_solved() {
            return if mask.has(current.value()) {
                LogicResult::None
            } else {
                LogicResult::Invalid
            };
        }

        let new_mask = current & mask;
        if new_mask == current {
            LogicResult::None
        } else if new_mask.is_empty() {
            LogicResult::Invalid
        } else {
            self.cells[cell.index()] = new_mask;
            LogicResult::Changed
        }
    }

    /// Removes the candidates of `mask` from a cell.
    pub fn clear_mask(&mut self, cell: CellIndex, mask: ValueMask) -> LogicResult {
        self.keep_mask(cell, !mask)
    }

    /// Places a value in a cell: writes the solved mask, clears every
    /// weak-linked candidate, then checks every constraint.
    ///
    /// Returns false when the value is not a live candidate, the cell is
    /// already solved, a weak-link elimination empties a cell, or a constraint
    /// rejects the placement.
    pub fn set_solved(&mut self, cell: CellIndex, value: usize) -> bool {
        if !self.cell(cell).has(value) {
            return false;
        }

        if self.cells[cell.index()].is_solved() {
            return false;
        }

        self.cells[cell.index()] = self.cells[cell.index()].with_only(value).solved();
        self.solved_count += 1;

        // Hold the metadata through a separate handle while mutating cells.
        let data = self.data.clone();

        let candidate = cell.candidate(value);
        for &linked in data.weak_links.links_for(candidate) {
            if !self.clear_candidate(linked) {
                return false;
            }
        }

        for constraint in data.constraints.iter() {
            if constraint.enforce(self, cell, value).is_invalid() {
                return false;
            }
        }

        true
    }

    /// Applies naked and hidden singles to a fixpoint.
    pub fn apply_singles(&mut self) -> LogicResult {
        let data = self.data.clone();
        let mut changed = false;

        loop {
            let mut progress = false;

            // Naked singles
            for cell in all_cells() {
                let mask = self.cell(cell);
                if mask.is_solved() {
                    continue;
                }
                if mask.is_empty() {
                    return LogicResult::Invalid;
                }
                if mask.is_single() {
                    if !self.set_solved(cell, mask.value()) {
                        return LogicResult::Invalid;
                    }
                    progress = true;
                }
            }

            // Hidden singles
            for house in data.houses.iter().filter(|house| house.len() == SIZE) {
                let mut at_least_once = ValueMask::new();
                let mut more_than_once = ValueMask::new();
                let mut set_mask = ValueMask::new();
                for &cell in house.cells() {
                    let mask = self.cell(cell);
                    if mask.is_solved() {
                        set_mask = set_mask | mask;
                    } else {
                        more_than_once = more_than_once | (at_least_once & mask);
                        at_least_once = at_least_once | mask;
                    }
                }
                set_mask = set_mask.unsolved();

                if at_least_once | set_mask != ValueMask::all() {
                    return LogicResult::Invalid;
                }

                let exactly_once = at_least_once & !more_than_once;
                for value in exactly_once {
                    for &cell in house.cells() {
                        let mask = self.cell(cell);
                        if !mask.is_solved() && mask.has(value) {
                            if !self.set_solved(cell, value) {
                                return LogicResult::Invalid;
                            }
                            progress = true;
                            break;
                        }
                    }
                }
            }

            if !progress {
                break;
            }
            changed = true;
            if self.is_solved() {
                break;
            }
        }

        if self.is_solved() {
            LogicResult::Solved
        } else if changed {
            LogicResult::Changed
        } else {
            LogicResult::None
        }
    }

    /// Whether two cells see each other for every value.
    pub fn is_exclusive(&self, cell0: CellIndex, cell1: CellIndex) -> bool {
        self.data.is_exclusive(cell0, cell1)
    }

    /// Every cell seen by `cell` for every value, excluding `cell` itself.
    pub fn seen_cells(&self, cell: CellIndex) -> Vec<CellIndex> {
        all_cells()
            .filter(|&other| other != cell && self.is_exclusive(cell, other))
            .collect()
    }

    /// Whether the cells are pairwise mutually exclusive (no digit can repeat).
    pub fn is_grouped(&self, cells: &[CellIndex]) -> bool {
        cells
            .iter()
            .tuple_combinations()
            .all(|(&cell0, &cell1)| self.is_exclusive(cell0, cell1))
    }

    pub fn is_grouped_for_value(&self, cells: &[CellIndex], value: usize) -> bool {
        cells.iter().tuple_combinations().all(|(&cell0, &cell1)| {
            self.data
                .weak_links
                .is_linked(cell0.candidate(value), cell1.candidate(value))
        })
    }

    pub fn is_grouped_for_values(&self, cells: &[CellIndex], values: ValueMask) -> bool {
        values.into_iter().all(|value| self.is_grouped_for_value(cells, value))
    }

    /// Greedily extracts the largest mutually-exclusive subset of `cells`,
    /// then recurses on the remainder. Every returned group is sorted.
    pub fn split_into_groups(&self, cells: &[CellIndex]) -> Vec<Vec<CellIndex>> {
        let mut remaining: Vec<CellIndex> = cells.iter().copied().unique().sorted().collect();
        let mut groups = Vec::new();

        while !remaining.is_empty() {
            let clique = self.largest_clique(&remaining);
            remaining.retain(|cell| !clique.contains(cell));
            groups.push(clique);
        }

        groups
    }

    /// The size of the largest clique in the mutual-visibility graph of
    /// `cells`, which lower-bounds the number of distinct digits among them.
    pub fn minimum_unique_values(&self, cells: &[CellIndex]) -> usize {
        let cells: Vec<CellIndex> = cells.iter().copied().unique().collect();
        self.largest_clique(&cells).len()
    }

    fn largest_clique(&self, cells: &[CellIndex]) -> Vec<CellIndex> {
        let mut best = Vec::new();
        let mut current = Vec::new();
        self.clique_recurse(cells, &mut current, &mut best);
        best.sort();
        best
    }

    fn clique_recurse(
        &self,
        candidates: &[CellIndex],
        current: &mut Vec<CellIndex>,
        best: &mut Vec<CellIndex>,
    ) {
        if current.len() > best.len() {
            *best = current.clone();
        }
        if current.len() + candidates.len() <= best.len() {
            return;
        }

        for (i, &cell) in candidates.iter().enumerate() {
            if current.len() + (candidates.len() - i) <= best.len() {
                break;
            }

            let compatible: Vec<CellIndex> = candidates[i + 1..]
                .iter()
                .copied()
                .filter(|&other| self.is_exclusive(cell, other))
                .collect();

            current.push(cell);
            self.clique_recurse(&compatible, current, best);
            current.pop();
        }
    }

    /// Whether `values` can be placed into `cells` in exactly that order:
    /// every value must be a live candidate of its cell and no two of the
    /// resulting candidates may be weak-linked.
    ///
    /// The slices must be the same length; a mismatch is a caller bug.
    pub fn can_place_digits(&self, cells: &[CellIndex], values: &[usize]) -> bool {
        assert_eq!(
            cells.len(),
            values.len(),
            "can_place_digits requires one value per cell"
        );

        let candidates: Vec<CandidateIndex> = cells
            .iter()
            .zip(values.iter())
            .map(|(&cell, &value)| cell.candidate(value))
            .collect();

        for (i, &candidate) in candidates.iter().enumerate() {
            if !self.has_candidate(candidate) {
                return false;
            }
            for &other in &candidates[..i] {
                if self.data.weak_links.is_linked(candidate, other) {
                    return false;
                }
            }
        }

        true
    }

    /// Whether `values` can be placed into `cells` in some order.
    pub fn can_place_digits_any_order(&self, cells: &[CellIndex], values: &[usize]) -> bool {
        assert_eq!(
            cells.len(),
            values.len(),
            "can_place_digits_any_order requires one value per cell"
        );

        let mut used = vec![false; values.len()];
        let mut chosen = Vec::with_capacity(cells.len());
        self.place_digits_recurse(cells, values, &mut used, &mut chosen)
    }

    fn place_digits_recurse(
        &self,
        cells: &[CellIndex],
        values: &[usize],
        used: &mut Vec<bool>,
        chosen: &mut Vec<CandidateIndex>,
    ) -> bool {
        let position = chosen.len();
        if position == cells.len() {
            return true;
        }

        let mask = self.cell(cells[position]);
        for i in 0..values.len() {
            if used[i] || !mask.has(values[i]) {
                continue;
            }

            let candidate = cells[position].candidate(values[i]);
            if chosen
                .iter()
                .any(|&previous| self.data.weak_links.is_linked(previous, candidate))
            {
                continue;
            }

            used[i] = true;
            chosen.push(candidate);
            if self.place_digits_recurse(cells, values, used, chosen) {
                return true;
            }
            chosen.pop();
            used[i] = false;
        }

        false
    }

    /// Speculatively sets each live candidate on a clone, propagates singles,
    /// and records what follows: contradictions eliminate the candidate, and
    /// every elimination observed on the clone becomes a weak link. Iterates
    /// to a fixpoint, then rebuilds the exclusivity table.
    pub(crate) fn discover_weak_links(&mut self) -> LogicResult {
        let mut overall = LogicResult::None;

        loop {
            let mut new_links: Vec<(CandidateIndex, CandidateIndex)> = Vec::new();
            let mut elims: Vec<CandidateIndex> = Vec::new();

            for candidate in all_candidates() {
                let (cell, value) = candidate.cell_index_and_value();
                let mask = self.cell(cell);
                if mask.is_solved() || !mask.has(value) {
                    continue;
                }

                let mut clone = self.clone();
                if !clone.set_solved(cell, value) || clone.apply_singles().is_invalid() {
                    elims.push(candidate);
                    continue;
                }

                for other in all_cells() {
                    if other == cell {
                        continue;
                    }
                    let removed = self.cell(other).unsolved() & !clone.cell(other).unsolved();
                    for other_value in removed {
                        let other_candidate = other.candidate(other_value);
                        if !self.data.weak_links.is_linked(candidate, other_candidate) {
                            new_links.push((candidate, other_candidate));
                        }
                    }
                }
            }

            if new_links.is_empty() && elims.is_empty() {
                break;
            }
            overall = LogicResult::Changed;

            let data = Arc::make_mut(&mut self.data);
            for (candidate0, candidate1) in new_links {
                data.weak_links.add(candidate0, candidate1);
            }

            if !self.clear_candidates(elims.into_iter()) {
                return LogicResult::Invalid;
            }
        }

        Arc::make_mut(&mut self.data).rebuild_exclusive_cells();

        overall
    }

    pub(crate) fn memo(&self) -> &SumMemo {
        &self.memo
    }

    pub(crate) fn memo_mut(&mut self) -> &mut SumMemo {
        &mut self.memo
    }
}

impl BoardData {
    fn new(regions: &[usize], constraints: Vec<Arc<dyn Constraint>>) -> BoardData {
        let houses = Self::create_houses(regions, &constraints);
        let houses_by_cell = Self::create_houses_by_cell(&houses);
        let full_houses = houses.iter().filter(|h| h.len() == SIZE).cloned().collect();
        let small_houses = houses
            .iter()
            .filter(|h| h.len() < SIZE)
            .sorted_by_key(|h| h.len())
            .cloned()
            .collect();

        BoardData {
            houses,
            houses_by_cell,
            full_houses,
            small_houses,
            weak_links: WeakLinks::new(),
            exclusive_cells: vec![bitvec![0; NUM_CELLS]; NUM_CELLS],
            constraints,
        }
    }

    pub fn houses(&self) -> &[Arc<House>] {
        &self.houses
    }

    pub fn houses_by_cell(&self) -> &[Vec<Arc<House>>] {
        &self.houses_by_cell
    }

    pub fn full_houses(&self) -> &[Arc<House>] {
        &self.full_houses
    }

    pub fn small_houses(&self) -> &[Arc<House>] {
        &self.small_houses
    }

    pub fn weak_links(&self) -> &WeakLinks {
        &self.weak_links
    }

    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }

    pub fn is_exclusive(&self, cell0: CellIndex, cell1: CellIndex) -> bool {
        self.exclusive_cells[cell0.index()][cell1.index()]
    }

    fn create_houses(regions: &[usize], constraints: &[Arc<dyn Constraint>]) -> Vec<Arc<House>> {
        let regions = if regions.len() == NUM_CELLS {
            regions.to_vec()
        } else {
            default_regions()
        };

        let mut houses: Vec<Arc<House>> = Vec::new();

        for row in 0..SIZE {
            let cells: Vec<CellIndex> = (0..SIZE).map(|col| CellIndex::from_rc(row, col)).collect();
            houses.push(Arc::new(House::new(&format!("Row {}", row + 1), &cells)));
        }

        for col in 0..SIZE {
            let cells: Vec<CellIndex> = (0..SIZE).map(|row| CellIndex::from_rc(row, col)).collect();
            houses.push(Arc::new(House::new(&format!("Column {}", col + 1), &cells)));
        }

        // An all-equal region list means "no regions".
        if !regions.iter().all_equal() {
            let mut cells_for_region: HashMap<usize, Vec<CellIndex>> = HashMap::new();
            for cell in all_cells() {
                cells_for_region
                    .entry(regions[cell.index()])
                    .or_default()
                    .push(cell);
            }

            for (&region, cells) in cells_for_region.iter().sorted_by_key(|(&region, _)| region) {
                if cells.len() == SIZE {
                    let house = House::new(&format!("Region {}", region + 1), cells);
                    if !houses.iter().any(|h| h.cells() == house.cells()) {
                        houses.push(Arc::new(house));
                    }
                }
            }
        }

        for constraint in constraints.iter() {
            for house in constraint.get_houses() {
                if !houses.iter().any(|h| h.cells() == house.cells()) {
                    houses.push(Arc::new(house));
                }
            }
        }

        houses
    }

    fn create_houses_by_cell(houses: &[Arc<House>]) -> Vec<Vec<Arc<House>>> {
        let mut houses_by_cell: Vec<Vec<Arc<House>>> = vec![Vec::new(); NUM_CELLS];
        for house in houses {
            for &cell in house.cells() {
                houses_by_cell[cell.index()].push(house.clone());
            }
        }
        houses_by_cell
    }

    /// Builds the graph and returns the candidates that constraints reported
    /// as never possible (self-linked pairs).
    fn init_weak_links(&mut self) -> Vec<CandidateIndex> {
        self.init_cell_and_house_links();
        let elims = self.init_constraint_links();
        self.rebuild_exclusive_cells();
        elims
    }

    fn init_cell_and_house_links(&mut self) {
        // A cell holds one value: all candidate pairs within a cell.
        for cell in all_cells() {
            for value0 in 1..=SIZE {
                for value1 in value0 + 1..=SIZE {
                    self.weak_links.add(cell.candidate(value0), cell.candidate(value1));
                }
            }
        }

        // A digit appears once per house.
        let houses = self.houses.clone();
        for house in houses {
            for (candidate0, candidate1) in nonrepeat_links(house.cells().iter().copied()) {
                self.weak_links.add(candidate0, candidate1);
            }
        }
    }

    fn init_constraint_links(&mut self) -> Vec<CandidateIndex> {
        let mut elims = Vec::new();
        let constraints = self.constraints.clone();
        for constraint in constraints {
            for (candidate0, candidate1) in constraint.get_weak_links() {
                if candidate0 == candidate1 {
                    elims.push(candidate0);
                } else {
                    self.weak_links.add(candidate0, candidate1);
                }
            }
        }
        elims
    }

    pub(crate) fn rebuild_exclusive_cells(&mut self) {
        for cell0 in 0..NUM_CELLS {
            for cell1 in cell0 + 1..NUM_CELLS {
                let exclusive = (1..=SIZE).all(|value| {
                    self.weak_links.is_linked(
                        CellIndex::new(cell0).candidate(value),
                        CellIndex::new(cell1).candidate(value),
                    )
                });
                self.exclusive_cells[cell0].set(cell1, exclusive);
                self.exclusive_cells[cell1].set(cell0, exclusive);
            }
        }
    }
}

impl Default for Board {
    /// An empty 9x9 board with standard boxes and no extra constraints.
    fn default() -> Self {
        Board::new(&[], vec![])
    }
}

impl std::hash::Hash for Board {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("cells", &self.cells)
            .field("solved_count", &self.solved_count)
            .finish()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in all_cells() {
            let mask = self.cell(cell);
            if mask.is_single() {
                write!(f, "{}", mask.value())?;
            } else {
                write!(f, ".")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::default();
        assert_eq!(board.houses().len(), 27);
        assert_eq!(board.full_houses().len(), 27);
        assert!(board.small_houses().is_empty());
        assert!(!board.is_solved());
        assert_eq!(board.unsolved_candidate_count(), NUM_CANDIDATES);

        // 8 other values in the cell + the same value in 20 peers.
        let cell = CellIndex::from_rc(4, 4);
        assert_eq!(board.weak_links().links_for(cell.candidate(5)).len(), 8 + 20);
        assert_eq!(board.seen_cells(cell).len(), 20);
    }

    #[test]
    fn test_group_links_exist() {
        let board = Board::default();
        for house in board.houses() {
            for (&cell0, &cell1) in house.cells().iter().tuple_combinations() {
                for value in 1..=SIZE {
                    assert!(board
                        .weak_links()
                        .is_linked(cell0.candidate(value), cell1.candidate(value)));
                }
            }
        }
    }

    #[test]
    fn test_cell_links_exist() {
        let board = Board::default();
        for cell in all_cells() {
            for value0 in 1..=SIZE {
                for value1 in 1..=SIZE {
                    if value0 != value1 {
                        assert!(board
                            .weak_links()
                            .is_linked(cell.candidate(value0), cell.candidate(value1)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_link_symmetry() {
        let board = Board::default();
        let links = board.weak_links();
        for candidate in all_candidates() {
            let list = links.links_for(candidate);
            assert!(list.windows(2).all(|w| w[0] < w[1]), "sorted, duplicate-free");
            for &other in list {
                assert!(links.is_linked(other, candidate));
            }
        }
    }

    #[test]
    fn test_set_solved() {
        let mut board = Board::default();
        let cell = CellIndex::from_rc(0, 0);
        assert!(board.set_solved(cell, 5));
        assert!(board.cell(cell).is_solved());
        assert_eq!(board.cell(cell).value(), 5);

        // Peers lost the candidate.
        assert!(!board.cell(CellIndex::from_rc(0, 8)).has(5));
        assert!(!board.cell(CellIndex::from_rc(8, 0)).has(5));
        assert!(!board.cell(CellIndex::from_rc(2, 2)).has(5));
        assert!(board.cell(CellIndex::from_rc(4, 4)).has(5));

        // Can't set it again, nor place a cleared candidate.
        assert!(!board.set_solved(cell, 5));
        assert!(!board.set_solved(CellIndex::from_rc(0, 8), 5));
    }

    #[test]
    fn test_keep_and_clear_mask() {
        let mut board = Board::default();
        let cell = CellIndex::from_rc(3, 3);
        assert_eq!(board.keep_mask(cell, ValueMask::all()), LogicResult::None);
        assert_eq!(
            board.keep_mask(cell, ValueMask::from_values(&[1, 2, 3])),
            LogicResult::Changed
        );
        assert_eq!(
            board.clear_mask(cell, ValueMask::from_value(1)),
            LogicResult::Changed
        );
        assert_eq!(board.cell(cell).to_vec(), vec![2, 3]);
        assert_eq!(
            board.keep_mask(cell, ValueMask::from_value(9)),
            LogicResult::Invalid
        );
    }

    #[test]
    fn test_groups() {
        let board = Board::default();
        let row: Vec<CellIndex> = (0..3).map(|col| CellIndex::from_rc(0, col)).collect();
        assert!(board.is_grouped(&row));
        assert!(board.is_grouped_for_value(&row, 1));

        let spread = [CellIndex::from_rc(0, 0), CellIndex::from_rc(4, 4)];
        assert!(!board.is_grouped(&spread));

        // r1c1 sees r1c2; r5c5 sees neither.
        let cells = [
            CellIndex::from_rc(0, 0),
            CellIndex::from_rc(0, 1),
            CellIndex::from_rc(4, 4),
        ];
        let groups = board.split_into_groups(&cells);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], vec![CellIndex::from_rc(0, 0), CellIndex::from_rc(0, 1)]);
        assert_eq!(groups[1], vec![CellIndex::from_rc(4, 4)]);
        assert_eq!(board.minimum_unique_values(&cells), 2);
    }

    #[test]
    fn test_can_place_digits() {
        let board = Board::default();
        let cells = [CellIndex::from_rc(0, 0), CellIndex::from_rc(0, 1)];
        assert!(board.can_place_digits(&cells, &[1, 2]));
        assert!(!board.can_place_digits(&cells, &[1, 1]));
        assert!(board.can_place_digits_any_order(&cells, &[2, 1]));

        let mut board = Board::default();
        board.set_solved(CellIndex::from_rc(0, 2), 1);
        assert!(!board.can_place_digits(&cells, &[1, 2]));
        assert!(!board.can_place_digits_any_order(&cells, &[1, 2]));
    }

    #[test]
    fn test_apply_singles_solves_simple_puzzle() {
        let mut board = Board::default();
        let givens =
            "5.6....29.9....13..4...376.........232.5......5..186.32..64.38..1.37529....821.7.";
        for (i, c) in givens.chars().enumerate() {
            if let Some(value) = c.to_digit(10) {
                assert!(board.set_solved(CellIndex::new(i), value as usize));
            }
        }
        assert_eq!(board.apply_singles(), LogicResult::Solved);
        assert_eq!(
            board.to_string(),
            "536187429897462135142953768681734952324596817759218643275649381418375296963821574"
        );
    }

    #[test]
    fn test_clone_independence() {
        let mut board = Board::default();
        let clone = board.clone();
        board.set_solved(CellIndex::new(0), 1);
        assert!(board.cell(CellIndex::new(0)).is_solved());
        assert!(!clone.cell(CellIndex::new(0)).is_solved());
        assert_eq!(clone.unsolved_candidate_count(), NUM_CANDIDATES);
    }
}
