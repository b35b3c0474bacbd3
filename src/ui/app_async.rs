use eframe::egui;
use poll_promise::Promise;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::chart::ChartBundle;
use crate::config::DEBUG_FLAGS;
use crate::data::SnapshotSource;
use crate::pipeline::refresh_first_available;
use crate::ui::app::ChartApp;
use crate::ui::app_state::ChartState;

pub(crate) struct RefreshResult {
    pub(crate) generation: u64,
    /// Bundle plus the signature of the source that produced it
    pub(crate) result: Result<(Arc<ChartBundle>, String), String>,
    elapsed_time: Duration,
}

impl RefreshResult {
    pub(crate) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl ChartApp {
    /// Asks for a new bundle. While one is in flight the request is only recorded;
    /// the newest request is started once the current job lands.
    pub(super) fn request_refresh(&mut self, reason: &str) {
        self.requested_generation += 1;
        if DEBUG_FLAGS.print_refresh_events {
            log::info!("Refresh #{} requested ({})", self.requested_generation, reason);
        }
        if self.refresh_promise.is_none() {
            self.start_refresh(self.requested_generation);
        }
    }

    fn start_refresh(&mut self, generation: u64) {
        let sources = Arc::clone(&self.sources);

        let promise = Promise::spawn_thread("chart_refresh", move || {
            run_refresh(generation, &sources)
        });

        self.refresh_promise = Some(promise);
    }

    pub(super) fn poll_refresh(&mut self, ctx: &egui::Context) {
        let outcome = self.refresh_promise.as_ref().and_then(|promise| {
            promise.ready().map(|done| {
                let result = done
                    .result
                    .as_ref()
                    .map(|(bundle, source)| (Arc::clone(bundle), source.clone()))
                    .map_err(|err| err.clone());
                (done.generation, result, done.elapsed_time())
            })
        });

        let Some((generation, result, elapsed)) = outcome else {
            return;
        };
        self.refresh_promise = None;

        if DEBUG_FLAGS.print_refresh_events {
            log::info!("Refresh #{} finished in {:?}", generation, elapsed);
        }
        let outcome = decide_refresh(generation, self.requested_generation, result);
        if let Some(next) = settle_refresh(&mut self.state, outcome) {
            self.start_refresh(next);
            return;
        }
        // Draw the swapped buffer on the next frame
        ctx.request_repaint();
    }
}

/// What a finished refresh does to the front buffer.
#[derive(Debug)]
pub(crate) enum RefreshOutcome {
    /// The newest request succeeded
    Apply {
        bundle: Arc<ChartBundle>,
        source: String,
    },
    /// A newer request arrived while this one ran. Drop it and start `generation`.
    Restart { generation: u64 },
    /// The newest request failed. The previous bundle stays.
    Failed { error: String },
}

/// Only the most recently requested generation may touch the front buffer.
pub(crate) fn decide_refresh(
    result_generation: u64,
    requested_generation: u64,
    result: Result<(Arc<ChartBundle>, String), String>,
) -> RefreshOutcome {
    if result_generation != requested_generation {
        if DEBUG_FLAGS.print_refresh_events {
            log::info!(
                "Refresh #{} superseded by #{}, discarding",
                result_generation,
                requested_generation
            );
        }
        return RefreshOutcome::Restart {
            generation: requested_generation,
        };
    }
    match result {
        Ok((bundle, source)) => RefreshOutcome::Apply { bundle, source },
        Err(error) => RefreshOutcome::Failed { error },
    }
}

/// Applies an outcome to the state. Returns the generation to start next, if any.
pub(crate) fn settle_refresh(state: &mut ChartState, outcome: RefreshOutcome) -> Option<u64> {
    match outcome {
        RefreshOutcome::Apply { bundle, source } => {
            if DEBUG_FLAGS.print_refresh_events {
                log::info!("Applied {} points from {}", bundle.point_count, source);
            }
            state.update_buffer(bundle, source);
            None
        }
        RefreshOutcome::Restart { generation } => Some(generation),
        RefreshOutcome::Failed { error } => {
            log::error!("Refresh failed: {}", error);
            state.record_error(error);
            None
        }
    }
}

fn run_refresh(generation: u64, sources: &[Box<dyn SnapshotSource>]) -> RefreshResult {
    let start = Instant::now();
    let result = refresh_first_available(sources)
        .map(|(bundle, source)| (Arc::new(bundle), source))
        .map_err(|e| format!("{:#}", e));
    RefreshResult {
        generation,
        result,
        elapsed_time: start.elapsed(),
    }
}
