use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::assets::ImagePanel;
use crate::dataset::Sample;
use crate::error::AppError;
use crate::model::selection::Selection;
use crate::pipeline::SelectionAggregator;
use crate::pipeline::stage2_species::SpeciesCount;
use crate::pipeline::stage3_genes::GeneTally;
use crate::report::html::{RenderTarget, render_html};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

/// Everything one page render needs, computed fresh per interaction.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub species_options: Vec<&'a str>,
    pub selected: Vec<String>,
    pub n_samples_total: usize,
    pub rows: Vec<&'a Sample>,
    pub species_count: SpeciesCount,
    pub gene_tally: GeneTally,
    pub images: Vec<ImagePanel>,
}

impl Dashboard<'_> {
    pub fn is_selected(&self, species: &str) -> bool {
        self.selected.iter().any(|s| s == species)
    }
}

pub fn build_dashboard<'a>(
    aggregator: &SelectionAggregator<'a>,
    selection: &Selection,
    images: Vec<ImagePanel>,
) -> Dashboard<'a> {
    let dataset = aggregator.dataset();
    let aggregation = aggregator.aggregate(selection);
    let species_options = dataset.species_options();
    let selected = selected_in_option_order(&species_options, selection);
    Dashboard {
        species_options,
        selected,
        n_samples_total: dataset.len(),
        rows: aggregation.rows,
        species_count: aggregation.species_count,
        gene_tally: aggregation.gene_tally,
        images,
    }
}

/// Selected labels in sidebar order; labels unknown to the dataset follow,
/// sorted.
fn selected_in_option_order(options: &[&str], selection: &Selection) -> Vec<String> {
    let mut out: Vec<String> = options
        .iter()
        .filter(|label| selection.contains(label))
        .map(|label| label.to_string())
        .collect();
    out.extend(
        selection
            .labels()
            .filter(|label| !options.contains(label))
            .map(str::to_string),
    );
    out
}

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub html: PathBuf,
    pub summary: PathBuf,
    pub text: PathBuf,
    pub images: Vec<PathBuf>,
}

/// Writes `dashboard.html`, `summary.json` and `report.txt` into `out_dir`,
/// copying shown images next to the page so its relative links resolve.
pub fn write_reports(dashboard: &Dashboard<'_>, out_dir: &Path) -> Result<ReportPaths, AppError> {
    fs::create_dir_all(out_dir).map_err(|source| AppError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html_path = out_dir.join("dashboard.html");
    write_text(&html_path, &render_html(dashboard, RenderTarget::Static))?;

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(dashboard)?)?;

    let text_path = out_dir.join("report.txt");
    write_text(&text_path, &render_report_text(dashboard))?;

    let mut images = Vec::new();
    for panel in &dashboard.images {
        let Some(source) = &panel.source else {
            continue;
        };
        let target = out_dir.join(panel.file_name);
        if same_file(source, &target) {
            images.push(target);
            continue;
        }
        fs::copy(source, &target).map_err(|source| AppError::Write {
            path: target.clone(),
            source,
        })?;
        images.push(target);
    }

    crate::info!("wrote dashboard to {}", html_path.display());
    Ok(ReportPaths {
        html: html_path,
        summary: summary_path,
        text: text_path,
        images,
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, contents).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_dashboard.rs"]
mod tests;
