pub mod defs;

use serde::Serialize;

use defs::{SampleDef, builtin_samples};

/// One eDNA sample with its static species prediction and gene annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub sample_id: String,
    pub sequence: String,
    pub predicted_species: String,
    pub annotation: String,
}

impl Sample {
    pub fn new(
        sample_id: impl Into<String>,
        sequence: impl Into<String>,
        predicted_species: impl Into<String>,
        annotation: impl Into<String>,
    ) -> Self {
        Self {
            sample_id: sample_id.into(),
            sequence: sequence.into(),
            predicted_species: predicted_species.into(),
            annotation: annotation.into(),
        }
    }
}

impl From<&SampleDef> for Sample {
    fn from(def: &SampleDef) -> Self {
        Sample::new(
            def.sample_id,
            def.sequence,
            def.predicted_species,
            def.annotation,
        )
    }
}

/// Ordered, read-only sample table. Built once and shared by reference.
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_samples().iter().map(Sample::from).collect())
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Distinct species labels in first-appearance order.
    pub fn species_options(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for sample in &self.samples {
            let label = sample.predicted_species.as_str();
            if !out.contains(&label) {
                out.push(label);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/dataset/tests.rs"]
mod tests;
