//! Headless refresh: runs the full pipeline once and prints a JSON report.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use wavetrend_chart::analysis::exhaustion::ExhaustionResult;
use wavetrend_chart::domain::SignalKind;
use wavetrend_chart::models::FormattedSummary;
use wavetrend_chart::{ChartBundle, Cli, refresh_first_available};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the summary and exhaustion verdict of an analyzer response")]
struct Args {
    #[command(flatten)]
    cli: Cli,

    /// Emit the whole chart bundle instead of the summary report
    #[arg(long, default_value_t = false)]
    full: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    title: &'a str,
    points: usize,
    summary: &'a FormattedSummary,
    exhaustion: &'a ExhaustionResult,
    exhaustion_text: String,
    drawn_signals: Vec<(String, usize)>,
    /// Divergence and pattern markers, per kind present in the response
    drawn_secondary: Vec<(String, usize)>,
    crosses: usize,
    skipped_events: usize,
}

impl<'a> Report<'a> {
    fn new(bundle: &'a ChartBundle, source: &'a str) -> Self {
        let annotations = &bundle.annotations;
        Self {
            source,
            title: &bundle.title,
            points: bundle.point_count,
            summary: &bundle.summary,
            exhaustion: &bundle.exhaustion,
            exhaustion_text: bundle.exhaustion.summary_text(),
            drawn_signals: SignalKind::CAPPED
                .iter()
                .map(|kind| (kind.to_string(), annotations.markers_of(*kind).count()))
                .collect(),
            drawn_secondary: annotations
                .secondary_groups
                .iter()
                .map(|group| (group.kind.to_string(), group.points.len()))
                .collect(),
            crosses: annotations.cross_count(),
            skipped_events: annotations.skipped,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let sources = args.cli.sources();
    let (bundle, source) = refresh_first_available(&sources)?;
    log::info!("Built chart bundle from {}", source);

    let json = if args.full {
        serde_json::to_string_pretty(&bundle)
    } else {
        serde_json::to_string_pretty(&Report::new(&bundle, &source))
    }
    .context("Failed to serialize report")?;

    println!("{}", json);
    Ok(())
}
