use eframe::egui::{CentralPanel, Context, Frame, Key, Margin, ScrollArea, SidePanel, TopBottomPanel};
use std::sync::Arc;

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::ChartUiExt;
use crate::ui::ui_panels::{LayerPanel, Panel, SummaryEvent, SummaryPanel};
use crate::utils::TimeUtils;

use super::app::ChartApp;

impl ChartApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                let bundle = self.state.bundle.clone();
                let mut summary_events = Vec::new();
                let mut layer_events = Vec::new();

                ScrollArea::vertical().id_salt("summary_panel").show(ui, |ui| {
                    summary_events =
                        SummaryPanel::new(bundle.as_deref(), self.is_refreshing()).render(ui);
                    layer_events = LayerPanel::new(self.visibility).render(ui);
                });

                for event in summary_events {
                    match event {
                        SummaryEvent::Reload => self.request_refresh("reload button"),
                    }
                }
                if let Some(visibility) = layer_events.pop() {
                    self.visibility = visibility;
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                let Some(bundle) = self.state.bundle.as_ref().map(Arc::clone) else {
                    ui.centered_and_justified(|ui| ui.label_subdued(UI_TEXT.status_loading));
                    return;
                };
                if bundle.is_empty() {
                    ui.centered_and_justified(|ui| ui.label_warning(UI_TEXT.status_no_data));
                    return;
                }
                ScrollArea::vertical().id_salt("plots").show(ui, |ui| {
                    self.plot_view
                        .show(ui, &bundle, self.state.generation, &self.visibility);
                });
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(updated) = self.state.last_update_time {
                        ui.metric(
                            "🕒 Refreshed",
                            &updated.format(TimeUtils::DISPLAY_TIME_FORMAT).to_string(),
                            UI_CONFIG.colors.value,
                        );
                        ui.separator();
                    }
                    if let Some(source) = &self.state.source {
                        ui.label_subdued(format!("📂 {}", source));
                        ui.separator();
                    }
                    if self.is_refreshing() {
                        ui.label_warning(UI_TEXT.status_refreshing);
                        ui.separator();
                    }
                    if let Some(error) = &self.state.last_error {
                        ui.label_error(format!("⚠ {}", error));
                    }
                });
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let (reload, toggle_markers) =
            ctx.input(|i| (i.key_pressed(Key::R), i.key_pressed(Key::M)));
        if reload && !self.is_refreshing() {
            self.request_refresh("R pressed");
        }
        if toggle_markers {
            self.visibility.signal_lines = !self.visibility.signal_lines;
            self.visibility.marker_groups = !self.visibility.marker_groups;
        }
    }
}
