use std::collections::BTreeSet;

use crate::dataset::Dataset;

/// Species labels chosen in the sidebar filter.
///
/// Labels are not checked against the dataset; unknown labels simply match
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    species: BTreeSet<String>,
}

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    /// Default selection: every species present in the dataset.
    pub fn all(dataset: &Dataset) -> Self {
        Self::from_labels(dataset.species_options())
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            species: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, species: &str) -> bool {
        self.species.contains(species)
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.species.iter().map(String::as_str)
    }
}
