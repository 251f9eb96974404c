//! Contains [`LogicalStepDesc`], the human-readable record of one performed step.

use crate::prelude::*;

/// Describes a single performed logical step and its results.
///
/// Besides the description string, a step can carry the candidates it reasoned
/// from, the candidates it eliminated, cells worth highlighting, and the
/// alternating strong/weak link chain that justified it, so hosts can render
/// the step graphically instead of (or as well as) textually.
///
/// Steps can also carry sub-steps: when a contradiction is found by testing a
/// value and then running further logic, the nested steps record that inner
/// reasoning. Most steps have none.
#[derive(Debug, Clone)]
pub struct LogicalStepDesc {
    step: String,
    source_candidates: Vec<CandidateIndex>,
    elim_candidates: Vec<CandidateIndex>,
    highlight_cells: Vec<CellIndex>,
    strong_links: Vec<(CandidateIndex, CandidateIndex)>,
    weak_links: Vec<(CandidateIndex, CandidateIndex)>,
    sub_steps: LogicalStepDescList,
    depth: usize,
}

impl LogicalStepDesc {
    pub fn new(step: &str, sub_steps: &LogicalStepDescList) -> Self {
        Self {
            sub_steps: sub_steps.with_depth(1),
            ..Self::from(step)
        }
    }

    /// A description combining a reason with its eliminations, rendered as
    /// `reason => -1r1c12`.
    pub fn from_elims(desc: &str, elims: &EliminationList) -> Self {
        Self {
            elim_candidates: elims.iter().collect(),
            ..Self::from(format!("{} => {}", desc, elims))
        }
    }

    /// The same description with the candidates the step reasoned from.
    #[must_use]
    pub fn with_source_candidates(mut self, candidates: &[CandidateIndex]) -> Self {
        self.source_candidates = candidates.to_vec();
        self
    }

    /// The same description with cells to highlight when rendering.
    #[must_use]
    pub fn with_highlight_cells(mut self, cells: &[CellIndex]) -> Self {
        self.highlight_cells = cells.to_vec();
        self
    }

    /// The same description with an alternating strong/weak link chain.
    #[must_use]
    pub fn with_links(
        mut self,
        strong_links: Vec<(CandidateIndex, CandidateIndex)>,
        weak_links: Vec<(CandidateIndex, CandidateIndex)>,
    ) -> Self {
        self.strong_links = strong_links;
        self.weak_links = weak_links;
        self
    }

    #[must_use]
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            step: format!("{}{}", prefix, self.step),
            ..self.clone()
        }
    }

    pub fn source_candidates(&self) -> &[CandidateIndex] {
        &self.source_candidates
    }

    pub fn elim_candidates(&self) -> &[CandidateIndex] {
        &self.elim_candidates
    }

    pub fn highlight_cells(&self) -> &[CellIndex] {
        &self.highlight_cells
    }

    pub fn strong_links(&self) -> &[(CandidateIndex, CandidateIndex)] {
        &self.strong_links
    }

    pub fn weak_links(&self) -> &[(CandidateIndex, CandidateIndex)] {
        &self.weak_links
    }

    pub fn sub_steps(&self) -> &LogicalStepDescList {
        &self.sub_steps
    }

    pub(crate) fn with_depth(&self, depth: usize) -> LogicalStepDesc {
        LogicalStepDesc {
            sub_steps: self.sub_steps.with_depth(depth + 1),
            depth,
            ..self.clone()
        }
    }

    fn indent_str(&self) -> String {
        let mut indent = String::new();
        if self.depth > 0 {
            indent.reserve(self.depth * 4);
            for _ in 0..self.depth - 1 {
                indent.push_str("    ");
            }
            indent.push_str("  | ");
        }
        indent
    }
}

impl From<&str> for LogicalStepDesc {
    fn from(step: &str) -> Self {
        Self::from(step.to_owned())
    }
}

impl From<String> for LogicalStepDesc {
    fn from(step: String) -> Self {
        Self {
            step,
            source_candidates: Vec::new(),
            elim_candidates: Vec::new(),
            highlight_cells: Vec::new(),
            strong_links: Vec::new(),
            weak_links: Vec::new(),
            sub_steps: LogicalStepDescList::new(),
            depth: 0,
        }
    }
}

impl std::fmt::Display for LogicalStepDesc {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let indent = self.indent_str();
        if self.sub_steps.is_empty() {
            write!(f, "{}{}", indent, self.step)
        } else {
            writeln!(f, "{}{}", indent, self.step)?;
            write!(f, "{}", self.sub_steps)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_elims_records_candidates() {
        let mut elims = EliminationList::new();
        elims.add_cell_value(CellIndex::from_rc(0, 0), 1);
        elims.add_cell_value(CellIndex::from_rc(0, 1), 1);

        let desc = LogicalStepDesc::from_elims("some reason", &elims);
        assert_eq!(desc.to_string(), "some reason => -1r1c12");
        assert_eq!(desc.elim_candidates().len(), 2);
        assert!(desc.source_candidates().is_empty());

        let sourced = desc.with_source_candidates(&[CellIndex::from_rc(4, 4).candidate(5)]);
        assert_eq!(sourced.source_candidates().len(), 1);
    }
}
