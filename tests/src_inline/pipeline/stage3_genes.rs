use super::*;
use crate::dataset::Dataset;
use crate::model::annotation::{GeneState, TALLY_GENES, TALLY_STATES};
use crate::model::selection::Selection;
use crate::pipeline::stage1_filter::filter_samples;

fn builtin_tally(selection: &Selection) -> GeneTally {
    let dataset = Dataset::builtin();
    let rows = filter_samples(&dataset, selection);
    tally_gene_presence(&rows, TALLY_GENES, TALLY_STATES)
}

#[test]
fn test_tally_full_selection() {
    let dataset = Dataset::builtin();
    let tally = builtin_tally(&Selection::all(&dataset));
    let tags: Vec<&str> = tally.entries().iter().map(|e| e.tag.as_str()).collect();
    assert_eq!(
        tags,
        vec!["GeneX Present", "GeneX Absent", "GeneY Present", "GeneY Absent"]
    );
    assert_eq!(tally.get("GeneX Present"), 3);
    assert_eq!(tally.get("GeneX Absent"), 2);
    assert_eq!(tally.get("GeneY Present"), 2);
    assert_eq!(tally.get("GeneY Absent"), 2);
}

#[test]
fn test_tally_empty_selection_is_all_zero() {
    let tally = builtin_tally(&Selection::none());
    assert_eq!(tally.entries().len(), 4);
    assert!(tally.entries().iter().all(|e| e.count == 0));
}

#[test]
fn test_tally_species_a_and_c() {
    let tally = builtin_tally(&Selection::from_labels(["Species A", "Species C"]));
    assert_eq!(tally.get("GeneX Present"), 2);
    assert_eq!(tally.get("GeneX Absent"), 0);
    assert_eq!(tally.get("GeneY Present"), 1);
    assert_eq!(tally.get("GeneY Absent"), 1);
}

#[test]
fn test_tally_partial_state_when_requested() {
    let dataset = Dataset::builtin();
    let rows: Vec<&Sample> = dataset.samples().iter().collect();
    let tally = tally_gene_presence(&rows, &["GeneY"], &[GeneState::Partial]);
    assert_eq!(tally.get("GeneY Partial"), 1);
}

#[test]
fn test_tally_is_case_and_spacing_sensitive() {
    let samples = vec![
        Sample::new("a", "A", "Species A", "genex: present"),
        Sample::new("b", "A", "Species A", "GeneX:Present"),
        Sample::new("c", "A", "Species A", "GeneX:  Present"),
    ];
    let rows: Vec<&Sample> = samples.iter().collect();
    let tally = tally_gene_presence(&rows, &["GeneX"], &["Present"]);
    assert_eq!(tally.get("GeneX Present"), 0);
}

#[test]
fn test_tally_matches_substrings_across_clause_boundaries() {
    let samples = vec![
        // repeated clause still counts the row once per tag
        Sample::new("a", "A", "Species A", "GeneX: Present, GeneX: Present"),
        // contradictory clauses contribute to both tags
        Sample::new("b", "A", "Species A", "GeneX: Present, GeneX: Absent"),
        // prefix match inside a longer token
        Sample::new("c", "A", "Species A", "GeneX: Presently unknown"),
        // gene name embedded in a longer gene name
        Sample::new("d", "A", "Species A", "SuperGeneX: Absent"),
    ];
    let rows: Vec<&Sample> = samples.iter().collect();
    let tally = tally_gene_presence(&rows, &["GeneX"], &["Present", "Absent"]);
    assert_eq!(tally.get("GeneX Present"), 3);
    assert_eq!(tally.get("GeneX Absent"), 2);
}

#[test]
fn test_tally_is_monotonic_over_supersets() {
    let dataset = Dataset::builtin();
    let subset = builtin_tally(&Selection::from_labels(["Species B"]));
    let superset = builtin_tally(&Selection::from_labels(["Species B", "Species D", "Species E"]));
    let full = builtin_tally(&Selection::all(&dataset));
    for (small, large) in subset.entries().iter().zip(superset.entries()) {
        assert_eq!(small.tag, large.tag);
        assert!(small.count <= large.count);
    }
    for (small, large) in superset.entries().iter().zip(full.entries()) {
        assert!(small.count <= large.count);
    }
}

#[test]
fn test_tally_no_genes_yields_no_entries() {
    let tally = tally_gene_presence::<&str>(&[], &[], &[]);
    assert!(tally.entries().is_empty());
    assert_eq!(tally.total(), 0);
}
