use eframe::egui::{Button, Ui};

use crate::chart::ChartBundle;
use crate::domain::{SignalFamily, SignalKind};
use crate::ui::app::LayerVisibility;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::ChartUiExt;
use crate::ui::utils::{section_heading, spaced_separator};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

pub enum SummaryEvent {
    Reload,
}

/// Latest readings, signal counts, and the exhaustion verdict.
pub struct SummaryPanel<'a> {
    bundle: Option<&'a ChartBundle>,
    is_refreshing: bool,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(bundle: Option<&'a ChartBundle>, is_refreshing: bool) -> Self {
        Self {
            bundle,
            is_refreshing,
        }
    }

    fn render_readings(ui: &mut Ui, bundle: &ChartBundle) {
        let summary = &bundle.summary;
        let value = UI_CONFIG.colors.value;
        ui.metric(UI_TEXT.label_price, &summary.price, value);
        ui.signed_metric(UI_TEXT.label_change, &summary.price_change);
        ui.metric(UI_TEXT.label_wt1, &summary.wt1, value);
        ui.metric(UI_TEXT.label_wt2, &summary.wt2, value);
        ui.signed_metric(UI_TEXT.label_money_flow, &summary.money_flow);
        ui.metric(UI_TEXT.label_status, &summary.status, UI_CONFIG.colors.heading);
        ui.metric(UI_TEXT.label_last_update, &summary.last_update, value);
    }

    fn render_signal_counts(ui: &mut Ui, bundle: &ChartBundle) {
        let summary = &bundle.summary;
        let annotations = &bundle.annotations;
        for (kind, reported) in [
            (SignalKind::Buy, &summary.buy_signals),
            (SignalKind::GoldBuy, &summary.gold_buy_signals),
            (SignalKind::Sell, &summary.sell_signals),
        ] {
            ui.signal_count(kind, Some(reported.as_str()), annotations.markers_of(kind).count());
        }
        ui.metric(
            UI_TEXT.label_crosses,
            &annotations.cross_count().to_string(),
            UI_CONFIG.colors.value,
        );
        for family in [SignalFamily::Divergence, SignalFamily::Pattern] {
            for group in annotations.secondary_of(family) {
                ui.signal_count(group.kind, None, group.points.len());
            }
        }
        if annotations.skipped > 0 {
            ui.label_warning(format!("{}: {}", UI_TEXT.label_skipped, annotations.skipped));
        }
    }

    fn render_exhaustion(ui: &mut Ui, bundle: &ChartBundle) {
        let result = &bundle.exhaustion;
        if !bundle.has_trend_exhaust() {
            ui.label_subdued(UI_TEXT.status_no_exhaust);
        }
        ui.level_metric(UI_TEXT.label_score, &format!("{:.1}", result.score), result.level);
        ui.level_metric(UI_TEXT.label_level, &result.level.to_string(), result.level);
        ui.metric(
            UI_TEXT.label_exhaust_signals,
            &result.signal_count.to_string(),
            UI_CONFIG.colors.value,
        );
    }
}

impl<'a> Panel for SummaryPanel<'a> {
    type Event = SummaryEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        if ui
            .add_enabled(!self.is_refreshing, Button::new(UI_TEXT.button_reload))
            .clicked()
        {
            events.push(SummaryEvent::Reload);
        }

        let Some(bundle) = self.bundle else {
            ui.label_subdued(UI_TEXT.status_loading);
            return events;
        };

        ui.chart_title(&bundle.title);
        if bundle.is_empty() {
            ui.label_warning(UI_TEXT.status_no_data);
        }

        section_heading(ui, UI_TEXT.summary_heading);
        Self::render_readings(ui, bundle);
        spaced_separator(ui);

        section_heading(ui, UI_TEXT.signals_heading);
        Self::render_signal_counts(ui, bundle);
        spaced_separator(ui);

        section_heading(ui, UI_TEXT.exhaustion_heading);
        Self::render_exhaustion(ui, bundle);

        events
    }
}

/// Checkboxes for the optional layers. Emits the new visibility when anything changes.
pub struct LayerPanel {
    visibility: LayerVisibility,
}

impl LayerPanel {
    pub fn new(visibility: LayerVisibility) -> Self {
        Self { visibility }
    }
}

impl Panel for LayerPanel {
    type Event = LayerVisibility;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.layers_heading);

        let before = self.visibility;
        let v = &mut self.visibility;
        ui.checkbox(&mut v.signal_lines, "Signal lines");
        ui.checkbox(&mut v.marker_groups, "Signal markers");
        ui.checkbox(&mut v.divergences, UI_TEXT.label_divergences);
        ui.checkbox(&mut v.patterns, UI_TEXT.label_patterns);
        ui.checkbox(&mut v.crosses, UI_TEXT.label_crosses);
        ui.checkbox(&mut v.wt_fill, UI_TEXT.label_wt_fill);
        ui.checkbox(&mut v.vwap, UI_TEXT.label_vwap);
        ui.checkbox(&mut v.rsi, UI_TEXT.label_rsi);
        ui.checkbox(&mut v.stoch, UI_TEXT.label_stoch);
        ui.checkbox(&mut v.zone_levels, UI_TEXT.label_zone_levels);

        if self.visibility != before {
            vec![self.visibility]
        } else {
            Vec::new()
        }
    }
}
