use eframe::{Frame, egui};
use poll_promise::Promise;
use std::sync::Arc;

use crate::config::DEBUG_FLAGS;
use crate::data::SnapshotSource;
use crate::ui::app_async::RefreshResult;
use crate::ui::app_state::ChartState;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

/// Optional layers the user can switch off from the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    pub signal_lines: bool,
    pub wt_fill: bool,
    pub vwap: bool,
    pub rsi: bool,
    pub stoch: bool,
    pub zone_levels: bool,
    pub marker_groups: bool,
    pub divergences: bool,
    pub patterns: bool,
    pub crosses: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            signal_lines: true,
            wt_fill: true,
            vwap: true,
            rsi: true,
            stoch: true,
            zone_levels: true,
            marker_groups: true,
            divergences: true,
            patterns: true,
            crosses: true,
        }
    }
}

pub struct ChartApp {
    pub(super) sources: Arc<Vec<Box<dyn SnapshotSource>>>,
    pub(super) state: ChartState,
    pub(super) plot_view: PlotView,
    pub(super) visibility: LayerVisibility,

    // Refresh scheduling: one job in flight, only the newest request is applied
    pub(super) refresh_promise: Option<Promise<RefreshResult>>,
    pub(super) requested_generation: u64,
}

impl ChartApp {
    pub fn new(cc: &eframe::CreationContext<'_>, sources: Vec<Box<dyn SnapshotSource>>) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut app = Self {
            sources: Arc::new(sources),
            state: ChartState::default(),
            plot_view: PlotView::new(),
            visibility: LayerVisibility::default(),
            refresh_promise: None,
            requested_generation: 0,
        };
        app.request_refresh("initial load");
        app
    }

    pub(super) fn is_refreshing(&self) -> bool {
        self.refresh_promise.is_some()
    }
}

impl eframe::App for ChartApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight refresh; its result is never applied
        self.refresh_promise = None;

        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_refresh(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        if self.is_refreshing() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
