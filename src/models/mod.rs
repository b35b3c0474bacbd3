// Normalized data models for one fetch cycle.
// Pure data, independent of UI/visualization.

pub mod series_set;
pub mod snapshot;
pub mod summary;

// Re-export key types for convenience
pub use series_set::{Indicator, SeriesSet};
pub use snapshot::{AnalyzerSnapshot, ChartMeta, ExhaustionSignals, TrendExhaust};
pub use summary::{FormattedSummary, Summary};
