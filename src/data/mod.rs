// Data intake: raw responses, their sources, and normalization
pub mod normalizer;
pub mod response;
pub mod source;

// Re-export commonly used types
pub use normalizer::normalize;
pub use response::RawAnalyzerResponse;
pub use source::{InlineSource, JsonFileSource, SnapshotSource, fetch_first_available};
