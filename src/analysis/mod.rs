// Scoring and classification of normalized oscillator data
pub mod exhaustion;
pub mod zone_status;

// Re-export commonly used types
pub use exhaustion::{
    ExhaustionLevel, ExhaustionResult, calculate_exhaustion_score, count_exhaustion_signals,
    evaluate, get_exhaustion_level,
};
pub use zone_status::{ZoneStatus, classify_zone};
