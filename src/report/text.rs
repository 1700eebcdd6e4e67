use crate::assets::ImageSlot;
use crate::pipeline::stage4_dashboard::Dashboard;
use crate::report::{HEADING, format_percent};

pub fn render_report_text(dashboard: &Dashboard<'_>) -> String {
    let mut out = String::new();

    out.push_str(HEADING);
    out.push('\n');
    out.push_str(&"=".repeat(HEADING.len()));
    out.push_str("\n\n");

    out.push_str("1. Selection\n");
    if dashboard.selected.is_empty() {
        out.push_str("Selected species: (none)\n");
    } else {
        out.push_str(&format!(
            "Selected species: {}\n",
            dashboard.selected.join(", ")
        ));
    }
    out.push_str(&format!(
        "Samples shown: {} of {}\n\n",
        dashboard.rows.len(),
        dashboard.n_samples_total
    ));

    out.push_str("2. Predicted species & annotations\n");
    if dashboard.rows.is_empty() {
        out.push_str("(no samples)\n");
    }
    for sample in &dashboard.rows {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            sample.sample_id, sample.predicted_species, sample.sequence, sample.annotation
        ));
    }
    out.push('\n');

    out.push_str("3. Samples per species\n");
    if dashboard.species_count.is_empty() {
        out.push_str("(no samples)\n");
    }
    let species_total = dashboard.species_count.total();
    for entry in dashboard.species_count.by_count_desc() {
        out.push_str(&format!(
            "{}: {} ({})\n",
            entry.species,
            entry.count,
            format_percent(entry.count, species_total)
        ));
    }
    out.push('\n');

    out.push_str("4. Gene annotation distribution\n");
    let total = dashboard.gene_tally.total();
    for entry in dashboard.gene_tally.entries() {
        out.push_str(&format!(
            "{}: {} ({})\n",
            entry.tag,
            entry.count,
            format_percent(entry.count, total)
        ));
    }
    out.push('\n');

    out.push_str("5. Images\n");
    let shown = dashboard.images.iter().filter(|p| p.is_shown()).count();
    out.push_str(&format!(
        "Images shown: {} of {}\n",
        shown,
        dashboard.images.len()
    ));
    for panel in &dashboard.images {
        match &panel.slot {
            ImageSlot::Shown { size_bytes, .. } => out.push_str(&format!(
                "{} ({}): shown, {} bytes\n",
                panel.file_name, panel.caption, size_bytes
            )),
            ImageSlot::Warning { message } => {
                out.push_str(&format!("WARNING: {message}\n"));
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
