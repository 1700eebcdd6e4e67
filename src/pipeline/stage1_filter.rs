use crate::dataset::{Dataset, Sample};
use crate::model::selection::Selection;

/// Rows whose predicted species is selected, in dataset order.
///
/// An empty selection yields no rows; there is no implicit "select all".
pub fn filter_samples<'a>(dataset: &'a Dataset, selection: &Selection) -> Vec<&'a Sample> {
    if selection.is_empty() {
        return Vec::new();
    }
    dataset
        .samples()
        .iter()
        .filter(|sample| selection.contains(&sample.predicted_species))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_filter.rs"]
mod tests;
