//! Error types for the refresh pipeline.
//!
//! Only structurally invalid input is an error. Missing samples and fields are
//! resolved by the normalizer, and bad signal timestamps are skipped one by one.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// A field that must be an array or a record has some other shape.
    /// The refresh is rejected and the previous chart stays on screen.
    #[error("Malformed input in `{field}`: {reason}")]
    MalformedInput { field: String, reason: String },

    /// The payload isn't JSON (or isn't a JSON object at the top level)
    #[error("Failed to parse analyzer response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PipelineError::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
