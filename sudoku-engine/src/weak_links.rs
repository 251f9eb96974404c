//! Contains [`WeakLinks`], the symmetric graph of candidates that cannot both be true.

use crate::candidate_index::CandidateIndex;
use crate::cell_index::CellIndex;
use crate::grid::{NUM_CANDIDATES, SIZE};
use itertools::Itertools;

/// The weak-link relation over all candidates.
///
/// A link between candidates `a` and `b` means `a` and `b` cannot both be true
/// in any solution. The relation is symmetric and stored as one
/// ascending-sorted, duplicate-free adjacency list per candidate, which makes
/// membership a binary search and multi-candidate elimination a sorted
/// intersection.
#[derive(Clone, Debug)]
pub struct WeakLinks {
    links: Vec<Vec<CandidateIndex>>,
    total: usize,
}

impl WeakLinks {
    pub fn new() -> Self {
        Self {
            links: vec![Vec::new(); NUM_CANDIDATES],
            total: 0,
        }
    }

    /// Adds a link in both directions, keeping each list sorted.
    ///
    /// Returns true if the link was not already present.
    pub fn add(&mut self, candidate0: CandidateIndex, candidate1: CandidateIndex) -> bool {
        if candidate0 == candidate1 {
            return false;
        }

        let added = Self::insert_sorted(&mut self.links[candidate0.index()], candidate1);
        if added {
            Self::insert_sorted(&mut self.links[candidate1.index()], candidate0);
            self.total += 1;
        }
        added
    }

    fn insert_sorted(list: &mut Vec<CandidateIndex>, candidate: CandidateIndex) -> bool {
        match list.binary_search(&candidate) {
            Ok(_) => false,
            Err(pos) => {
                list.insert(pos, candidate);
                true
            }
        }
    }

    pub fn is_linked(&self, candidate0: CandidateIndex, candidate1: CandidateIndex) -> bool {
        self.links[candidate0.index()].binary_search(&candidate1).is_ok()
    }

    /// The sorted adjacency list of one candidate.
    pub fn links_for(&self, candidate: CandidateIndex) -> &[CandidateIndex] {
        &self.links[candidate.index()]
    }

    /// Number of distinct links in the graph.
    pub fn total_links(&self) -> usize {
        self.total
    }

    /// Candidates that are weak-linked to *every* one of the given candidates:
    /// whichever of them turns out true, these are all eliminated.
    ///
    /// Computed as the sorted intersection of the adjacency lists. The result
    /// is ascending and excludes the input candidates themselves (no candidate
    /// links to itself, so they can never survive the intersection).
    pub fn calc_elims(&self, candidates: &[CandidateIndex]) -> Vec<CandidateIndex> {
        let Some((&first, rest)) = candidates.split_first() else {
            return Vec::new();
        };

        let mut elims = self.links_for(first).to_vec();
        for &candidate in rest {
            if elims.is_empty() {
                break;
            }
            let list = self.links_for(candidate);
            elims.retain(|c| list.binary_search(c).is_ok());
        }
        elims
    }
}

impl Default for WeakLinks {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the weak links for a group of cells in which no digit can repeat.
pub fn nonrepeat_links(
    cells: impl Iterator<Item = CellIndex> + Clone,
) -> Vec<(CandidateIndex, CandidateIndex)> {
    cells
        .tuple_combinations()
        .flat_map(|(cell0, cell1)| {
            (1..=SIZE).map(move |value| (cell0.candidate(value), cell1.candidate(value)))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cell_index::all_cells;

    #[test]
    fn test_add_and_query() {
        let mut links = WeakLinks::new();
        let a = CellIndex::new(0).candidate(1);
        let b = CellIndex::new(1).candidate(1);
        let c = CellIndex::new(2).candidate(1);

        assert!(links.add(a, b));
        assert!(!links.add(a, b));
        assert!(!links.add(b, a));
        assert!(!links.add(a, a));
        assert!(links.add(c, a));

        assert!(links.is_linked(a, b));
        assert!(links.is_linked(b, a));
        assert!(links.is_linked(a, c));
        assert!(!links.is_linked(b, c));
        assert_eq!(links.total_links(), 2);

        // Lists stay sorted and duplicate-free.
        for cell in all_cells().take(3) {
            for value in 1..=SIZE {
                let list = links.links_for(cell.candidate(value));
                assert!(list.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_calc_elims() {
        let mut links = WeakLinks::new();
        let a = CellIndex::new(0).candidate(1);
        let b = CellIndex::new(1).candidate(1);
        let target = CellIndex::new(2).candidate(1);
        let other = CellIndex::new(3).candidate(1);

        links.add(a, target);
        links.add(b, target);
        links.add(a, other);

        assert_eq!(links.calc_elims(&[a, b]), vec![target]);
        assert_eq!(links.calc_elims(&[a]), vec![target, other]);
        assert_eq!(links.calc_elims(&[]), vec![]);
    }

    #[test]
    fn test_nonrepeat_links() {
        let cells = [CellIndex::new(0), CellIndex::new(1), CellIndex::new(2)];
        let links = nonrepeat_links(cells.iter().copied());
        assert_eq!(links.len(), 3 * SIZE);
        assert!(links.contains(&(cells[0].candidate(4), cells[2].candidate(4))));
    }
}
