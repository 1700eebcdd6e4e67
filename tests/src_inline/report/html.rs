use super::*;
use crate::assets::{ImagePanel, ImageSlot};
use crate::dataset::Dataset;
use crate::model::selection::Selection;
use crate::pipeline::SelectionAggregator;
use crate::pipeline::stage4_dashboard::build_dashboard;

fn warning_panels() -> Vec<ImagePanel> {
    vec![
        ImagePanel {
            file_name: "flowchart.png",
            caption: "System Architecture",
            source: None,
            slot: ImageSlot::Warning {
                message: "flowchart.png not found. Add it to the assets directory to show it."
                    .to_string(),
            },
        },
        ImagePanel {
            file_name: "dashboard.png",
            caption: "Dashboard Preview",
            source: None,
            slot: ImageSlot::Shown {
                href: "/assets/dashboard.png".to_string(),
                size_bytes: 10,
            },
        },
    ]
}

#[test]
fn test_render_full_page_sections() {
    let dataset = Dataset::builtin();
    let aggregator = SelectionAggregator::new(&dataset);
    let dashboard = build_dashboard(&aggregator, &Selection::all(&dataset), warning_panels());
    let html = render_html(&dashboard, RenderTarget::Served);

    assert!(html.contains("<title>AI eDNA Dashboard</title>"));
    assert!(html.contains("AI-powered eDNA Biodiversity Dashboard"));
    assert!(html.contains("Predicted Species &amp; Annotations"));
    assert!(html.contains("Number of Samples per Species"));
    assert!(html.contains("Gene Annotation Distribution"));
    assert_eq!(html.matches("type=\"checkbox\"").count(), 5);
    assert_eq!(html.matches(" checked/>").count(), 5);
    assert!(html.contains("<fieldset>"));
    assert!(html.contains("<div class=\"warning\">flowchart.png not found."));
    assert!(html.contains("<img src=\"/assets/dashboard.png\" alt=\"Dashboard Preview\"/>"));
    assert!(html.contains("GeneX: Present, GeneY: Partial"));
}

#[test]
fn test_render_partial_selection_checks_only_selected() {
    let dataset = Dataset::builtin();
    let aggregator = SelectionAggregator::new(&dataset);
    let selection = Selection::from_labels(["Species A", "Species C"]);
    let dashboard = build_dashboard(&aggregator, &selection, Vec::new());
    let html = render_html(&dashboard, RenderTarget::Served);

    assert_eq!(html.matches(" checked/>").count(), 2);
    assert!(html.contains("<td>S1</td>"));
    assert!(html.contains("<td>S3</td>"));
    assert!(!html.contains("<td>S2</td>"));
}

#[test]
fn test_render_empty_selection_keeps_page_intact() {
    let dataset = Dataset::builtin();
    let aggregator = SelectionAggregator::new(&dataset);
    let dashboard = build_dashboard(&aggregator, &Selection::none(), warning_panels());
    let html = render_html(&dashboard, RenderTarget::Served);

    assert!(html.contains("No samples match the current selection."));
    assert_eq!(html.matches(NO_DATA_MARKER).count(), 2);
    assert!(html.contains("System Architecture &amp; Dashboard Preview"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_render_static_disables_form() {
    let dataset = Dataset::builtin();
    let aggregator = SelectionAggregator::new(&dataset);
    let dashboard = build_dashboard(&aggregator, &Selection::all(&dataset), Vec::new());
    let html = render_html(&dashboard, RenderTarget::Static);
    assert!(html.contains("<fieldset disabled>"));
    assert!(html.contains("Static export."));
}

const NO_DATA_MARKER: &str = "class=\"no-data\"";

#[test]
fn test_sidebar_shows_count_per_option() {
    let dataset = Dataset::builtin();
    let aggregator = SelectionAggregator::new(&dataset);
    let selection = Selection::from_labels(["Species A"]);
    let dashboard = build_dashboard(&aggregator, &selection, Vec::new());
    let html = render_html(&dashboard, RenderTarget::Served);
    assert!(html.contains(" Species A <span class=\"count\">(1)</span></label>"));
    assert!(html.contains(" Species B <span class=\"count\">(0)</span></label>"));
}
