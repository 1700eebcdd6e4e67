use super::*;
use crate::model::annotation::GeneState;

#[test]
fn test_aggregate_species_a_and_c() {
    let dataset = Dataset::builtin();
    let aggregator = SelectionAggregator::new(&dataset);
    let out = aggregator.aggregate(&Selection::from_labels(["Species A", "Species C"]));
    let ids: Vec<&str> = out.rows.iter().map(|s| s.sample_id.as_str()).collect();
    assert_eq!(ids, vec!["S1", "S3"]);
    assert_eq!(out.species_count.len(), 2);
    assert_eq!(out.species_count.get("Species A"), 1);
    assert_eq!(out.species_count.get("Species C"), 1);
    assert_eq!(out.gene_tally.get("GeneX Present"), 2);
}

#[test]
fn test_aggregate_empty_selection() {
    let dataset = Dataset::builtin();
    let out = SelectionAggregator::new(&dataset).aggregate(&Selection::none());
    assert!(out.rows.is_empty());
    assert!(out.species_count.is_empty());
    for label in dataset.species_options() {
        assert_eq!(out.species_count.get(label), 0);
    }
    assert_eq!(out.gene_tally.entries().len(), 4);
    assert_eq!(out.gene_tally.total(), 0);
}

#[test]
fn test_aggregate_default_selection() {
    let dataset = Dataset::builtin();
    let out = SelectionAggregator::new(&dataset).aggregate(&Selection::all(&dataset));
    assert_eq!(out.rows.len(), 5);
    assert_eq!(out.species_count.len(), 5);
    assert!(out.species_count.entries().iter().all(|e| e.count == 1));
    assert_eq!(out.gene_tally.get("GeneX Present"), 3);
    assert_eq!(out.gene_tally.get("GeneX Absent"), 2);
    assert_eq!(out.gene_tally.get("GeneY Present"), 2);
    assert_eq!(out.gene_tally.get("GeneY Absent"), 2);
}

#[test]
fn test_aggregate_is_repeatable() {
    let dataset = Dataset::builtin();
    let aggregator = SelectionAggregator::new(&dataset);
    let selection = Selection::from_labels(["Species B", "Species E"]);
    let first = aggregator.aggregate(&selection);
    let _ = aggregator.aggregate(&Selection::none());
    let second = aggregator.aggregate(&selection);
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.species_count, second.species_count);
    assert_eq!(first.gene_tally, second.gene_tally);
    assert_eq!(dataset.len(), 5);
}

#[test]
fn test_aggregate_with_custom_genes() {
    let dataset = Dataset::builtin();
    let aggregator = SelectionAggregator::new(&dataset)
        .with_genes(&["GeneY"], &[GeneState::Partial, GeneState::Present]);
    let out = aggregator.aggregate(&Selection::all(&dataset));
    let tags: Vec<&str> = out.gene_tally.entries().iter().map(|e| e.tag.as_str()).collect();
    assert_eq!(tags, vec!["GeneY Partial", "GeneY Present"]);
    assert_eq!(out.gene_tally.get("GeneY Partial"), 1);
    assert_eq!(out.gene_tally.get("GeneY Present"), 2);
    assert_eq!(aggregator.dataset().len(), 5);
}
