// Domain types and value objects
pub mod polarity;
pub mod signal;
pub mod time_point;

// Re-export commonly used types
pub use polarity::{FlowPolarity, Polarity};
pub use signal::{CrossEvent, SignalEvent, SignalFamily, SignalKind, SignalSet};
pub use time_point::{TimePoint, Timestamped};
