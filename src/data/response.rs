use serde_json::{Map, Value};

use crate::error::{PipelineError, Result};

/// The analyzer response exactly as received, before any cleaning.
///
/// Kept as a JSON object so the normalizer can tell "absent" (fill with defaults)
/// apart from "wrong shape" (reject the refresh).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAnalyzerResponse {
    fields: Map<String, Value>,
}

pub static NULL: Value = Value::Null;

impl RawAnalyzerResponse {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(PipelineError::malformed(
                "<root>",
                format!("expected an object, got {}", json_type_name(&other)),
            )),
        }
    }

    /// Field by its response name; `Null` when absent.
    pub fn field(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
