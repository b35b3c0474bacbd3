use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

/// Where an analyzer response comes from. The HTTP client lives outside this crate;
/// anything that can hand over the raw JSON text plugs in here.
pub trait SnapshotSource: Send + Sync {
    fn fetch(&self) -> Result<String>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> String;
}

/// A response saved to disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for JsonFileSource {
    fn fetch(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read analyzer response: {}", self.path.display()))
    }

    fn signature(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// A response already held in memory.
#[derive(Debug, Clone)]
pub struct InlineSource {
    label: &'static str,
    text: String,
}

impl InlineSource {
    pub fn new(label: &'static str, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

impl SnapshotSource for InlineSource {
    fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn signature(&self) -> String {
        format!("inline:{}", self.label)
    }
}

/// Tries each source in order and returns the first payload with the signature of its source.
pub fn fetch_first_available(sources: &[Box<dyn SnapshotSource>]) -> Result<(String, String)> {
    for source in sources {
        match source.fetch() {
            Ok(text) => return Ok((text, source.signature())),
            Err(e) => {
                log::info!("Source {} unavailable: {:#}", source.signature(), e);
                // Continue to the next source
            }
        }
    }
    Err(anyhow!("All {} sources failed to provide a response", sources.len()))
}
