pub mod stage1_filter;
pub mod stage2_species;
pub mod stage3_genes;
pub mod stage4_dashboard;

use crate::dataset::{Dataset, Sample};
use crate::model::annotation::{GeneState, TALLY_GENES, TALLY_STATES};
use crate::model::selection::Selection;
use stage1_filter::filter_samples;
use stage2_species::{SpeciesCount, count_by_species};
use stage3_genes::{GeneTally, tally_gene_presence};

#[derive(Debug, Clone)]
pub struct Aggregation<'a> {
    pub rows: Vec<&'a Sample>,
    pub species_count: SpeciesCount,
    pub gene_tally: GeneTally,
}

/// Filter, count and tally over a borrowed dataset. Holds no state beyond
/// its configuration, so every call recomputes from scratch.
#[derive(Debug, Clone)]
pub struct SelectionAggregator<'a> {
    dataset: &'a Dataset,
    genes: Vec<&'a str>,
    states: Vec<GeneState>,
}

impl<'a> SelectionAggregator<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            genes: TALLY_GENES.to_vec(),
            states: TALLY_STATES.to_vec(),
        }
    }

    pub fn with_genes(mut self, genes: &[&'a str], states: &[GeneState]) -> Self {
        self.genes = genes.to_vec();
        self.states = states.to_vec();
        self
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn aggregate(&self, selection: &Selection) -> Aggregation<'a> {
        let rows = filter_samples(self.dataset, selection);
        let species_count = count_by_species(&rows);
        let gene_tally = tally_gene_presence(&rows, &self.genes, &self.states);
        crate::debug!(
            selected = selection.len(),
            rows = rows.len(),
            species = species_count.len(),
            "aggregated selection"
        );
        Aggregation {
            rows,
            species_count,
            gene_tally,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
