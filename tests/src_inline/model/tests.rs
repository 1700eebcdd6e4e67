use super::annotation::{GeneState, TALLY_GENES, TALLY_STATES, clause_pattern, state_order, tally_tag};
use super::selection::Selection;
use crate::dataset::Dataset;

#[test]
fn test_clause_pattern_uses_colon_space() {
    assert_eq!(clause_pattern("GeneX", "Present"), "GeneX: Present");
    assert_eq!(tally_tag("GeneY", "Absent"), "GeneY Absent");
}

#[test]
fn test_state_order_and_charted_states() {
    assert_eq!(state_order().len(), 3);
    assert_eq!(TALLY_STATES, &[GeneState::Present, GeneState::Absent]);
    assert_eq!(TALLY_GENES, &["GeneX", "GeneY"]);
    assert_eq!(GeneState::Partial.to_string(), "Partial");
}

#[test]
fn test_selection_all_covers_every_species() {
    let dataset = Dataset::builtin();
    let selection = Selection::all(&dataset);
    assert_eq!(selection.len(), 5);
    for label in dataset.species_options() {
        assert!(selection.contains(label));
    }
}

#[test]
fn test_selection_none_is_empty() {
    let selection = Selection::none();
    assert!(selection.is_empty());
    assert!(!selection.contains("Species A"));
}

#[test]
fn test_selection_accepts_unknown_labels() {
    let selection = Selection::from_labels(["Species Z", "Species A", "Species Z"]);
    assert_eq!(selection.len(), 2);
    assert!(selection.contains("Species Z"));
    let labels: Vec<&str> = selection.labels().collect();
    assert_eq!(labels, vec!["Species A", "Species Z"]);
}
