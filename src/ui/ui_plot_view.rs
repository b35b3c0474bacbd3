use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::chart::ChartBundle;
use crate::config::PLOT_CONFIG;
use crate::ui::app::LayerVisibility;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::utils::time_utils::format_plot_x;

use crate::ui::plot_layers::{
    ExhaustLayer, LayerContext, MomentumLayer, MoneyFlowLayer, PlotLayer, PriceLineLayer,
    SignalLineLayer, SignalMarkerLayer, WaveTrendBandLayer, WaveTrendLayer, ZoneLevelLayer,
};

/// Draws the four stacked, x-linked panels of one bundle.
#[derive(Default)]
pub struct PlotView {
    /// Bundle generation last drawn; a new one resets zoom and pan
    shown_generation: Option<u64>,
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        bundle: &ChartBundle,
        generation: u64,
        visibility: &LayerVisibility,
    ) {
        let reset = self.shown_generation != Some(generation);
        self.shown_generation = Some(generation);

        let ctx = LayerContext { bundle, visibility };

        let price_layers: Vec<Box<dyn PlotLayer>> =
            vec![Box::new(PriceLineLayer), Box::new(SignalLineLayer)];
        panel("price_plot", UI_TEXT.plot_price, PLOT_CONFIG.price_plot_height, reset, bundle)
            .show(ui, |plot_ui| render_layers(plot_ui, &ctx, &price_layers));

        // Back to front
        let oscillator_layers: Vec<Box<dyn PlotLayer>> = vec![
            Box::new(WaveTrendBandLayer),
            Box::new(ZoneLevelLayer),
            Box::new(WaveTrendLayer),
            Box::new(MomentumLayer),
            Box::new(SignalMarkerLayer),
        ];
        let marker_extent = PLOT_CONFIG.sell_marker_offset.abs() + 8.0;
        panel(
            "oscillator_plot",
            UI_TEXT.plot_oscillator,
            PLOT_CONFIG.oscillator_plot_height,
            reset,
            bundle,
        )
        .include_y(-marker_extent)
        .include_y(marker_extent)
        .show(ui, |plot_ui| render_layers(plot_ui, &ctx, &oscillator_layers));

        let money_flow_layers: Vec<Box<dyn PlotLayer>> = vec![Box::new(MoneyFlowLayer)];
        panel(
            "money_flow_plot",
            UI_TEXT.plot_money_flow,
            PLOT_CONFIG.money_flow_plot_height,
            reset,
            bundle,
        )
        .show(ui, |plot_ui| render_layers(plot_ui, &ctx, &money_flow_layers));

        if bundle.has_trend_exhaust() {
            let exhaust_layers: Vec<Box<dyn PlotLayer>> = vec![Box::new(ExhaustLayer)];
            panel(
                "exhaust_plot",
                UI_TEXT.plot_exhaust,
                PLOT_CONFIG.exhaust_plot_height,
                reset,
                bundle,
            )
            .include_y(-100.0)
            .include_y(0.0)
            .show(ui, |plot_ui| render_layers(plot_ui, &ctx, &exhaust_layers));
        }
    }
}

fn render_layers(plot_ui: &mut egui_plot::PlotUi, ctx: &LayerContext, layers: &[Box<dyn PlotLayer>]) {
    for layer in layers {
        layer.render(plot_ui, ctx);
    }
}

fn panel(
    id: &'static str,
    y_label: &str,
    height: f32,
    reset: bool,
    bundle: &ChartBundle,
) -> Plot<'static> {
    let mut plot = Plot::new(id)
        .height(height)
        .legend(Legend::default().position(Corner::LeftTop))
        .link_axis(UI_CONFIG.link_group, [true, false])
        .link_cursor(UI_CONFIG.link_group, [true, false])
        .custom_x_axes(vec![create_x_axis(bundle.intraday)])
        .custom_y_axes(vec![create_y_axis(y_label)])
        .allow_scroll(false);
    if let Some((first, last)) = bundle.x_bounds() {
        plot = plot.include_x(first).include_x(last);
    }
    if reset { plot.reset() } else { plot }
}

fn create_x_axis(intraday: bool) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| format_plot_x(grid_mark.value, intraday))
}

fn create_y_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .placement(HPlacement::Left)
}
