//! Sum decomposition over sets of cells, used by every arithmetic constraint
//! (cages, arrows, little killers, and friends).
//!
//! A [`SumCellsHelper`] partitions its cells into [`SumGroup`]s of mutually
//! exclusive cells; within a group all values are distinct, which makes
//! per-group enumeration cheap. Totals and restrictions combine across groups
//! through a degrees-of-freedom argument: a group may absorb exactly the slack
//! the other groups leave against the target.
//!
//! The expensive per-group computations are memoized in the board's cache,
//! keyed by the cells and their current masks, so repeated propagation passes
//! and speculative clones never pay twice for the same state.

use crate::prelude::*;
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap};

/// Highest total any cell set can reach (all nine values in nine groups).
const MAX_TOTAL: usize = SIZE * SIZE * (SIZE + 1) / 2;

/// Typed memo cache for sum computations, owned per board.
#[derive(Clone, Default)]
pub(crate) struct SumMemo {
    min_max: HashMap<GroupStateKey, Option<(usize, usize)>>,
    sums: HashMap<GroupStateKey, Vec<usize>>,
    restrict: HashMap<RestrictKey, Option<Vec<ValueMask>>>,
}

/// A group's cells together with their current masks. Keys computed from a
/// stale board state can never be confused with the current one.
#[derive(Clone, PartialEq, Eq, Hash)]
struct GroupStateKey {
    cells: Box<[CellIndex]>,
    masks: Box<[ValueMask]>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct RestrictKey {
    state: GroupStateKey,
    sums: Box<[usize]>,
}

/// A set of mutually exclusive cells summed as a unit.
#[derive(Clone, Debug)]
pub struct SumGroup {
    cells: Vec<CellIndex>,
}

impl SumGroup {
    /// The caller is responsible for the cells being pairwise exclusive;
    /// [`SumCellsHelper`] builds groups through
    /// [`Board::split_into_groups`], which guarantees it.
    pub fn new(mut cells: Vec<CellIndex>) -> Self {
        cells.sort();
        cells.dedup();
        Self { cells }
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    fn state_key(&self, board: &Board) -> GroupStateKey {
        GroupStateKey {
            cells: self.cells.clone().into_boxed_slice(),
            masks: self
                .cells
                .iter()
                .map(|&cell| board.cell(cell))
                .collect::<Vec<_>>()
                .into_boxed_slice(),
        }
    }

    /// Solved subtotal and the cells still unset.
    fn partition(&self, board: &Board) -> (usize, Vec<CellIndex>) {
        let mut set_sum = 0;
        let mut unset = Vec::new();
        for &cell in &self.cells {
            let mask = board.cell(cell);
            if mask.is_solved() {
                set_sum += mask.value();
            } else {
                unset.push(cell);
            }
        }
        (set_sum, unset)
    }

    /// The minimum and maximum attainable totals, or `None` when no
    /// assignment of distinct placeable values exists.
    pub fn min_max_sum(&self, board: &mut Board) -> Option<(usize, usize)> {
        let key = self.state_key(board);
        if let Some(&cached) = board.memo().min_max.get(&key) {
            return cached;
        }

        let result = self.min_max_sum_uncached(board);
        board.memo_mut().min_max.insert(key, result);
        result
    }

    fn min_max_sum_uncached(&self, board: &Board) -> Option<(usize, usize)> {
        // A full group contains every value exactly once.
        if self.cells.len() == SIZE {
            let total = SIZE * (SIZE + 1) / 2;
            return Some((total, total));
        }

        let (set_sum, unset) = self.partition(board);
        if unset.is_empty() {
            return Some((set_sum, set_sum));
        }

        let union = unset
            .iter()
            .fold(ValueMask::new(), |mask, &cell| mask | board.cell(cell));
        if union.count() < unset.len() {
            return None;
        }

        if unset.len() == 1 {
            return Some((set_sum + union.min(), set_sum + union.max()));
        }

        // As many values as cells: the total is determined, if placeable.
        if union.count() == unset.len() {
            let values = union.to_vec();
            if board.can_place_digits_any_order(&unset, &values) {
                let sum: usize = values.iter().sum();
                return Some((set_sum + sum, set_sum + sum));
            }
            return None;
        }

        let values = union.to_vec();
        let mut min = usize::MAX;
        let mut max = 0;
        for combination in values.iter().copied().combinations(unset.len()) {
            if board.can_place_digits_any_order(&unset, &combination) {
                let sum: usize = set_sum + combination.iter().sum::<usize>();
                min = min.min(sum);
                max = max.max(sum);
            }
        }

        if min == usize::MAX {
            None
        } else {
            Some((min, max))
        }
    }

    /// Every attainable total, ascending.
    pub fn possible_sums(&self, board: &mut Board) -> Vec<usize> {
        let key = self.state_key(board);
        if let Some(cached) = board.memo().sums.get(&key) {
            return cached.clone();
        }

        let result = self.possible_sums_uncached(board);
        board.memo_mut().sums.insert(key, result.clone());
        result
    }

    fn possible_sums_uncached(&self, board: &Board) -> Vec<usize> {
        if self.cells.len() == SIZE {
            return vec![SIZE * (SIZE + 1) / 2];
        }

        let (set_sum, unset) = self.partition(board);
        if unset.is_empty() {
            return vec![set_sum];
        }

        let union = unset
            .iter()
            .fold(ValueMask::new(), |mask, &cell| mask | board.cell(cell));
        if union.count() < unset.len() {
            return Vec::new();
        }

        if unset.len() == 1 {
            return union.into_iter().map(|value| set_sum + value).collect();
        }

        let values = union.to_vec();
        let mut sums = BTreeSet::new();
        for combination in values.iter().copied().combinations(unset.len()) {
            if board.can_place_digits_any_order(&unset, &combination) {
                sums.insert(set_sum + combination.iter().sum::<usize>());
            }
        }
        sums.into_iter().collect()
    }

    /// Restricts every unset cell to the candidates that participate in some
    /// assignment whose total lies in `sums`.
    pub fn restrict_sum_set(&self, board: &mut Board, sums: &[usize]) -> LogicResult {
        let targets: Vec<usize> = sums.iter().copied().sorted().dedup().collect();
        if targets.is_empty() {
            return LogicResult::Invalid;
        }

        // A full group always totals 45; nothing to narrow.
        if self.cells.len() == SIZE {
            let total = SIZE * (SIZE + 1) / 2;
            return if targets.binary_search(&total).is_ok() {
                LogicResult::None
            } else {
                LogicResult::Invalid
            };
        }

        let (set_sum, unset) = self.partition(board);
        if unset.is_empty() {
            return if targets.binary_search(&set_sum).is_ok() {
                LogicResult::None
            } else {
                LogicResult::Invalid
            };
        }

        let key = RestrictKey {
            state: self.state_key(board),
            sums: targets.clone().into_boxed_slice(),
        };
        let cached = board.memo().restrict.get(&key).cloned();
        let keep_masks = match cached {
            Some(cached) => cached,
            None => {
                let computed = self.compute_keep_masks(board, &unset, set_sum, &targets);
                board.memo_mut().restrict.insert(key, computed.clone());
                computed
            }
        };

        let Some(keep_masks) = keep_masks else {
            return LogicResult::Invalid;
        };

        let mut result = LogicResult::None;
        for (&cell, &mask) in unset.iter().zip(keep_masks.iter()) {
            match board.keep_mask(cell, mask) {
                LogicResult::Invalid => return LogicResult::Invalid,
                other => result = result.combine(other),
            }
        }
        result
    }

    /// Restricts to totals in `min..=max`.
    pub fn restrict_sum_range(&self, board: &mut Board, min: usize, max: usize) -> LogicResult {
        if min > max {
            return LogicResult::Invalid;
        }
        let sums: Vec<usize> = (min..=max).collect();
        self.restrict_sum_set(board, &sums)
    }

    /// Per-unset-cell union of values over all valid assignments totalling
    /// into `targets`, or `None` when no assignment exists.
    fn compute_keep_masks(
        &self,
        board: &Board,
        unset: &[CellIndex],
        set_sum: usize,
        targets: &[usize],
    ) -> Option<Vec<ValueMask>> {
        let mut keep = vec![ValueMask::new(); unset.len()];
        let mut chosen = Vec::with_capacity(unset.len());
        let mut found = false;
        self.assignments_recurse(
            board,
            unset,
            targets,
            set_sum,
            ValueMask::new(),
            &mut chosen,
            &mut keep,
            &mut found,
        );
        found.then_some(keep)
    }

    #[allow(clippy::too_many_arguments)]
    fn assignments_recurse(
        &self,
        board: &Board,
        unset: &[CellIndex],
        targets: &[usize],
        current_sum: usize,
        used: ValueMask,
        chosen: &mut Vec<CandidateIndex>,
        keep: &mut [ValueMask],
        found: &mut bool,
    ) {
        let position = chosen.len();
        if position == unset.len() {
            if targets.binary_search(&current_sum).is_ok() {
                *found = true;
                for (i, candidate) in chosen.iter().enumerate() {
                    keep[i] = keep[i].with(candidate.value());
                }
            }
            return;
        }

        let remaining = unset.len() - position;
        let max_target = targets[targets.len() - 1];
        let min_target = targets[0];
        if current_sum + remaining > max_target || current_sum + remaining * SIZE < min_target {
            return;
        }

        let mask = board.cell(unset[position]) & !used;
        for value in mask {
            let candidate = unset[position].candidate(value);
            if chosen
                .iter()
                .any(|&previous| board.weak_links().is_linked(previous, candidate))
            {
                continue;
            }

            chosen.push(candidate);
            self.assignments_recurse(
                board,
                unset,
                targets,
                current_sum + value,
                used.with(value),
                chosen,
                keep,
                found,
            );
            chosen.pop();
        }
    }
}

/// Sum reasoning over an arbitrary set of cells, split into exclusive groups.
#[derive(Clone, Debug)]
pub struct SumCellsHelper {
    cells: Vec<CellIndex>,
    groups: Vec<SumGroup>,
}

impl SumCellsHelper {
    pub fn new(board: &Board, cells: &[CellIndex]) -> Self {
        let groups = board
            .split_into_groups(cells)
            .into_iter()
            .map(SumGroup::new)
            .collect();
        Self {
            cells: cells.iter().copied().sorted().dedup().collect(),
            groups,
        }
    }

    pub fn cells(&self) -> &[CellIndex] {
        &self.cells
    }

    pub fn groups(&self) -> &[SumGroup] {
        &self.groups
    }

    /// Min and max attainable totals over all groups combined.
    pub fn min_max_sum(&self, board: &mut Board) -> Option<(usize, usize)> {
        let mut min = 0;
        let mut max = 0;
        for group in &self.groups {
            let (group_min, group_max) = group.min_max_sum(board)?;
            min += group_min;
            max += group_max;
        }
        Some((min, max))
    }

    /// Every attainable total. Exact while at most five groups are
    /// incomplete; beyond that the contiguous `[min, max]` range is reported
    /// as an approximation.
    pub fn possible_sums(&self, board: &mut Board) -> Vec<usize> {
        let mut per_group = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let sums = group.possible_sums(board);
            if sums.is_empty() {
                return Vec::new();
            }
            per_group.push(sums);
        }

        let incomplete = per_group.iter().filter(|sums| sums.len() > 1).count();
        if incomplete > 5 {
            let Some((min, max)) = self.min_max_sum(board) else {
                return Vec::new();
            };
            return (min..=max).collect();
        }

        let mut reachable = vec![false; MAX_TOTAL + 1];
        reachable[0] = true;
        for sums in &per_group {
            let mut next = vec![false; MAX_TOTAL + 1];
            for (total, _) in reachable.iter().enumerate().filter(|(_, &r)| r) {
                for &sum in sums {
                    if total + sum <= MAX_TOTAL {
                        next[total + sum] = true;
                    }
                }
            }
            reachable = next;
        }

        reachable
            .iter()
            .enumerate()
            .filter_map(|(total, &r)| r.then_some(total))
            .collect()
    }

    /// Restricts the cells to candidates compatible with a total in
    /// `min..=max`, distributing the target across groups by their degrees of
    /// freedom.
    pub fn restrict_sum_range(&self, board: &mut Board, min: usize, max: usize) -> LogicResult {
        if min > max {
            return LogicResult::Invalid;
        }

        let mut bounds = Vec::with_capacity(self.groups.len());
        let mut total_min = 0;
        let mut total_max = 0;
        for group in &self.groups {
            let Some((group_min, group_max)) = group.min_max_sum(board) else {
                return LogicResult::Invalid;
            };
            total_min += group_min;
            total_max += group_max;
            bounds.push((group_min, group_max));
        }

        if max < total_min || min > total_max {
            return LogicResult::Invalid;
        }

        let mut result = LogicResult::None;
        for (group, &(group_min, group_max)) in self.groups.iter().zip(bounds.iter()) {
            // The group can absorb at most the slack the others leave.
            let others_min = total_min - group_min;
            let others_max = total_max - group_max;
            let allowed_min = group_min.max(min.saturating_sub(others_max));
            let allowed_max = group_max.min(max.saturating_sub(others_min));
            if allowed_min > allowed_max {
                return LogicResult::Invalid;
            }

            match group.restrict_sum_range(board, allowed_min, allowed_max) {
                LogicResult::Invalid => return LogicResult::Invalid,
                other => result = result.combine(other),
            }
        }
        result
    }

    /// Restricts the cells to candidates compatible with some total in `sums`.
    pub fn restrict_sum_set(&self, board: &mut Board, sums: &[usize]) -> LogicResult {
        let targets: Vec<usize> = sums.iter().copied().sorted().dedup().collect();
        if targets.is_empty() {
            return LogicResult::Invalid;
        }

        if self.groups.len() == 1 {
            return self.groups[0].restrict_sum_set(board, &targets);
        }

        let mut per_group = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            let group_sums = group.possible_sums(board);
            if group_sums.is_empty() {
                return LogicResult::Invalid;
            }
            per_group.push(group_sums);
        }

        let incomplete = per_group.iter().filter(|group_sums| group_sums.len() > 1).count();
        if incomplete > 5 {
            // Too wide for the exact sweep; fall back to the range bound.
            let min = targets[0];
            let max = targets[targets.len() - 1];
            return self.restrict_sum_range(board, min, max);
        }

        let mut result = LogicResult::None;
        for (index, group) in self.groups.iter().enumerate() {
            let others_reachable = Self::reachable_totals(&per_group, index);
            let admissible: Vec<usize> = per_group[index]
                .iter()
                .copied()
                .filter(|&group_sum| {
                    others_reachable
                        .iter()
                        .enumerate()
                        .filter(|(_, &r)| r)
                        .any(|(others, _)| targets.binary_search(&(group_sum + others)).is_ok())
                })
                .collect();
            if admissible.is_empty() {
                return LogicResult::Invalid;
            }

            match group.restrict_sum_set(board, &admissible) {
                LogicResult::Invalid => return LogicResult::Invalid,
                other => result = result.combine(other),
            }
        }
        result
    }

    /// Totals reachable by every group except `skip_index`.
    fn reachable_totals(per_group: &[Vec<usize>], skip_index: usize) -> Vec<bool> {
        let mut reachable = vec![false; MAX_TOTAL + 1];
        reachable[0] = true;
        for (index, sums) in per_group.iter().enumerate() {
            if index == skip_index {
                continue;
            }
            let mut next = vec![false; MAX_TOTAL + 1];
            for (total, _) in reachable.iter().enumerate().filter(|(_, &r)| r) {
                for &sum in sums {
                    if total + sum <= MAX_TOTAL {
                        next[total + sum] = true;
                    }
                }
            }
            reachable = next;
        }
        reachable
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn row_cells(row: usize, count: usize) -> Vec<CellIndex> {
        (0..count).map(|col| CellIndex::from_rc(row, col)).collect()
    }

    #[test]
    fn test_min_max_single_group() {
        let mut board = Board::default();
        let cells = row_cells(0, 3);
        let helper = SumCellsHelper::new(&board, &cells);
        assert_eq!(helper.groups().len(), 1);
        // Distinct digits: 1+2+3 .. 7+8+9
        assert_eq!(helper.min_max_sum(&mut board), Some((6, 24)));
    }

    #[test]
    fn test_min_max_split_groups() {
        let mut board = Board::default();
        // Two cells that do not see each other can repeat digits.
        let cells = vec![CellIndex::from_rc(0, 0), CellIndex::from_rc(4, 4)];
        let helper = SumCellsHelper::new(&board, &cells);
        assert_eq!(helper.groups().len(), 2);
        assert_eq!(helper.min_max_sum(&mut board), Some((2, 18)));
    }

    #[test]
    fn test_restrict_sum_forces_minimal_set() {
        let mut board = Board::default();
        let cells = row_cells(0, 3);
        let helper = SumCellsHelper::new(&board, &cells);
        assert_eq!(helper.restrict_sum_range(&mut board, 6, 6), LogicResult::Changed);
        for &cell in &cells {
            assert_eq!(u32::from(board.cell(cell)), 0b111);
        }

        // Restricting again is a no-op, served from the memo.
        assert_eq!(helper.restrict_sum_range(&mut board, 6, 6), LogicResult::None);
    }

    #[test]
    fn test_restrict_sum_infeasible() {
        let mut board = Board::default();
        let cells = row_cells(0, 2);
        let helper = SumCellsHelper::new(&board, &cells);
        // Two distinct digits cannot total 2.
        assert_eq!(helper.restrict_sum_range(&mut board, 2, 2), LogicResult::Invalid);
    }

    #[test]
    fn test_restrict_sum_set_skips_gap_totals() {
        let mut board = Board::default();
        let cells = row_cells(0, 2);
        let helper = SumCellsHelper::new(&board, &cells);
        // Totals 3 or 4: candidates limited to 1, 2, 3.
        assert_eq!(
            helper.restrict_sum_set(&mut board, &[3, 4]),
            LogicResult::Changed
        );
        for &cell in &cells {
            assert_eq!(board.cell(cell).to_vec(), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_possible_sums_with_solved_cell() {
        let mut board = Board::default();
        let cells = row_cells(0, 2);
        assert!(board.set_solved(cells[0], 9));
        let helper = SumCellsHelper::new(&board, &cells);
        // 9 + each remaining candidate of r1c2 (1..=8).
        assert_eq!(
            helper.possible_sums(&mut board),
            (10..=17).collect::<Vec<usize>>()
        );
    }

    #[test]
    fn test_restriction_keeps_only_participating_values() {
        let mut board = Board::default();
        let cells = row_cells(0, 3);
        let helper = SumCellsHelper::new(&board, &cells);
        assert_eq!(helper.restrict_sum_range(&mut board, 7, 7), LogicResult::Changed);
        // 7 = 1+2+4 only; every surviving value appears in that combination.
        for &cell in &cells {
            assert_eq!(board.cell(cell).to_vec(), vec![1, 2, 4]);
        }
    }

    #[test]
    fn test_full_group_sum_is_fixed() {
        let mut board = Board::default();
        let cells = row_cells(0, 9);
        let helper = SumCellsHelper::new(&board, &cells);
        assert_eq!(helper.min_max_sum(&mut board), Some((45, 45)));
        assert_eq!(helper.possible_sums(&mut board), vec![45]);
        assert_eq!(helper.restrict_sum_range(&mut board, 45, 45), LogicResult::None);
        assert_eq!(helper.restrict_sum_range(&mut board, 44, 44), LogicResult::Invalid);
    }
}
