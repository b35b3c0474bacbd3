use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::chart::ChartBundle;

/// What the viewer currently shows.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    /// THE FRONT BUFFER.
    /// Read every frame, never mutated in place. A finished refresh replaces the Arc.
    pub bundle: Option<Arc<ChartBundle>>,
    /// Bumped on every swap so views can tell a new bundle from a redraw
    pub generation: u64,
    pub source: Option<String>,
    pub last_update_time: Option<DateTime<Utc>>,
    /// Last refresh error. The previous bundle stays on screen.
    pub last_error: Option<String>,
}

impl ChartState {
    /// Promotes a finished bundle to the front buffer.
    pub fn update_buffer(&mut self, bundle: Arc<ChartBundle>, source: String) {
        self.bundle = Some(bundle);
        self.generation += 1;
        self.source = Some(source);
        self.last_update_time = Some(Utc::now());
        self.last_error = None;
    }

    pub fn record_error(&mut self, error: String) {
        self.last_error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::refresh;

    #[test]
    fn test_failed_refresh_keeps_previous_bundle() {
        let mut state = ChartState::default();
        let bundle = Arc::new(refresh(r#"{ "dates": ["2024-01-01"], "price": [1.0] }"#).unwrap());
        state.update_buffer(Arc::clone(&bundle), "inline:test".to_string());
        assert_eq!(state.generation, 1);

        state.record_error("Malformed input".to_string());
        assert!(Arc::ptr_eq(state.bundle.as_ref().unwrap(), &bundle));
        assert_eq!(state.last_error.as_deref(), Some("Malformed input"));

        state.update_buffer(bundle, "inline:test".to_string());
        assert_eq!(state.generation, 2);
        assert!(state.last_error.is_none());
    }
}
