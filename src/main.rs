mod assets;
mod dataset;
mod error;
mod model;
mod pipeline;
mod report;
mod serve;
mod tracing;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::assets::resolve_images;
use crate::dataset::Dataset;
use crate::error::AppError;
use crate::model::annotation::{TALLY_GENES, state_order};
use crate::model::selection::Selection;
use crate::pipeline::SelectionAggregator;
use crate::pipeline::stage4_dashboard::{build_dashboard, write_reports};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::serve::{ServeConfig, start_server};

/// eDNA biodiversity dashboard over a fixed table of predicted species
#[derive(Parser, Debug)]
#[command(name = "edna-dashboard")]
#[command(version)]
#[command(about = "AI-powered eDNA biodiversity dashboard")]
struct Cli {
    /// Verbose output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print filtered rows, species counts and gene tallies
    Summary(SummaryArgs),

    /// Write dashboard.html, summary.json and report.txt to a directory
    Render(RenderArgs),

    /// Serve the interactive dashboard over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct SelectionArgs {
    /// Species to include (repeatable); defaults to every species
    #[arg(short, long = "species", value_name = "LABEL")]
    species: Vec<String>,

    /// Select no species at all
    #[arg(long, conflicts_with = "species")]
    none: bool,

    /// Also tally `Partial` gene states
    #[arg(long)]
    include_partial: bool,
}

impl SelectionArgs {
    fn resolve(&self, dataset: &Dataset) -> Selection {
        if self.none {
            Selection::none()
        } else if self.species.is_empty() {
            Selection::all(dataset)
        } else {
            Selection::from_labels(self.species.iter().cloned())
        }
    }

    fn aggregator<'a>(&self, dataset: &'a Dataset) -> SelectionAggregator<'a> {
        let aggregator = SelectionAggregator::new(dataset);
        if self.include_partial {
            aggregator.with_genes(TALLY_GENES, state_order())
        } else {
            aggregator
        }
    }
}

#[derive(Args, Debug)]
struct SummaryArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    format: SummaryFormat,

    /// Directory holding flowchart.png and dashboard.png
    #[arg(long, default_value = ".")]
    assets: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SummaryFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Output directory
    #[arg(short, long)]
    out: PathBuf,

    /// Directory holding flowchart.png and dashboard.png
    #[arg(long, default_value = ".")]
    assets: PathBuf,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8501)]
    port: u16,

    /// Directory holding flowchart.png and dashboard.png
    #[arg(long, default_value = ".")]
    assets: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    crate::tracing::init_tracing(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    let dataset = Dataset::builtin();
    crate::debug!(samples = dataset.len(), "loaded builtin dataset");

    match command {
        Command::Summary(args) => {
            let output = summarize(&dataset, &args)?;
            println!("{output}");
        }
        Command::Render(args) => {
            let selection = args.selection.resolve(&dataset);
            let aggregator = args.selection.aggregator(&dataset);
            let images = resolve_images(&args.assets, "");
            let dashboard = build_dashboard(&aggregator, &selection, images);
            let paths = write_reports(&dashboard, &args.out)?;
            crate::info!(
                "rendered {} of {} samples: {}, {}, {} (+{} images)",
                dashboard.rows.len(),
                dataset.len(),
                paths.html.display(),
                paths.summary.display(),
                paths.text.display(),
                paths.images.len()
            );
        }
        Command::Serve(args) => {
            let config = ServeConfig {
                bind: args.bind,
                port: args.port,
                assets_dir: args.assets,
            };
            start_server(&dataset, &config)?;
        }
    }
    Ok(())
}

fn summarize(dataset: &Dataset, args: &SummaryArgs) -> Result<String, AppError> {
    let selection = args.selection.resolve(dataset);
    let aggregator = args.selection.aggregator(dataset);
    let images = resolve_images(&args.assets, "");
    let dashboard = build_dashboard(&aggregator, &selection, images);
    Ok(match args.format {
        SummaryFormat::Text => render_report_text(&dashboard),
        SummaryFormat::Json => render_summary_json(&dashboard)?,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
