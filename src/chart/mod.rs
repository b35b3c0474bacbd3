// Chart-ready data: point sequences, annotations, and the per-refresh bundle
pub mod annotations;
pub mod bundle;
pub mod transform;

pub use annotations::{AnnotationSet, MAX_SIGNALS, MarkerGroup, VerticalMarker, most_recent};
pub use bundle::ChartBundle;
pub use transform::{AreaFill, ColoredSegment, PolarPoint, finite_runs, money_flow_runs, stoch_runs};
