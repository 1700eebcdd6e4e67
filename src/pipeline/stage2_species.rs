use serde::Serialize;

use crate::dataset::Sample;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesEntry {
    pub species: String,
    pub count: usize,
}

/// Samples per species, in order of first appearance among the counted rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SpeciesCount {
    entries: Vec<SpeciesEntry>,
}

impl SpeciesCount {
    pub fn entries(&self) -> &[SpeciesEntry] {
        &self.entries
    }

    /// Count for `species`; 0 when the label was never seen.
    pub fn get(&self, species: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.species == species)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Bar chart order: count descending, ties in first-appearance order.
    pub fn by_count_desc(&self) -> Vec<&SpeciesEntry> {
        let mut out: Vec<&SpeciesEntry> = self.entries().iter().collect();
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }
}

pub fn count_by_species(rows: &[&Sample]) -> SpeciesCount {
    let mut entries: Vec<SpeciesEntry> = Vec::new();
    for sample in rows {
        match entries
            .iter_mut()
            .find(|e| e.species == sample.predicted_species)
        {
            Some(entry) => entry.count += 1,
            None => entries.push(SpeciesEntry {
                species: sample.predicted_species.clone(),
                count: 1,
            }),
        }
    }
    SpeciesCount { entries }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_species.rs"]
mod tests;
