//! Configuration module for the WaveTrend chart.

pub mod analysis;

mod debug; // Private on purpose; use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod plot;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig};
pub use plot::PLOT_CONFIG;
