use serde::Serialize;

use crate::dataset::Sample;
use crate::model::annotation::{clause_pattern, tally_tag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneTallyEntry {
    pub tag: String,
    pub count: usize,
}

/// Annotation tallies keyed by `"<Gene> <State>"`, gene-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneTally {
    entries: Vec<GeneTallyEntry>,
}

impl GeneTally {
    pub fn entries(&self) -> &[GeneTallyEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn get(&self, tag: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.tag == tag)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }
}

/// Counts rows whose annotation contains `"<gene>: <state>"` verbatim.
///
/// Plain substring matching: case-sensitive, no clause parsing, a row counts
/// at most once per tag. Every gene/state pair gets an entry, zero or not.
pub fn tally_gene_presence<S: AsRef<str>>(
    rows: &[&Sample],
    genes: &[&str],
    states: &[S],
) -> GeneTally {
    let mut entries = Vec::with_capacity(genes.len() * states.len());
    for gene in genes {
        for state in states {
            let state = state.as_ref();
            let pattern = clause_pattern(gene, state);
            let count = rows
                .iter()
                .filter(|sample| sample.annotation.contains(&pattern))
                .count();
            entries.push(GeneTallyEntry {
                tag: tally_tag(gene, state),
                count,
            });
        }
    }
    GeneTally { entries }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_genes.rs"]
mod tests;
