#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod chart;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use chart::ChartBundle;
pub use data::{InlineSource, JsonFileSource, SnapshotSource};
pub use error::PipelineError;
pub use models::AnalyzerSnapshot;
pub use pipeline::{refresh, refresh_first_available, refresh_from};
pub use ui::ChartApp;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

/// Bundled response used when no input file answers.
pub const DEMO_RESPONSE: &str = include_str!("../demos/sample_response.json");

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Analyzer response JSON files, tried in order
    #[arg(short, long = "input", value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Don't fall back to the bundled demo response
    #[arg(long, default_value_t = false)]
    pub no_demo: bool,
}

impl Cli {
    /// Sources in priority order: every `--input` file, then the demo response.
    pub fn sources(&self) -> Vec<Box<dyn SnapshotSource>> {
        let mut sources: Vec<Box<dyn SnapshotSource>> = self
            .inputs
            .iter()
            .map(|path| Box::new(JsonFileSource::new(path)) as Box<dyn SnapshotSource>)
            .collect();
        if !self.no_demo {
            sources.push(Box::new(InlineSource::new("demo", DEMO_RESPONSE)));
        }
        sources
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: &Cli) -> Box<dyn eframe::App> {
    Box::new(ChartApp::new(cc, cli.sources()))
}
