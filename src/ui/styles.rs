use eframe::egui::{Color32, RichText, Ui};

use crate::analysis::exhaustion::ExhaustionLevel;
use crate::config::PLOT_CONFIG;
use crate::domain::SignalKind;
use crate::ui::config::UI_CONFIG;
use crate::ui::utils::{change_color, exhaustion_color};

/// Row styles of the summary panel and status bar, added directly to `egui::Ui`.
pub trait ChartUiExt {
    fn label_subdued(&mut self, text: impl Into<String>);

    /// `Label: value`, label subdued and value in `color`.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Metric colored by the sign of its formatted value (change %, money flow).
    fn signed_metric(&mut self, label: &str, formatted: &str);

    /// Metric in the color of an exhaustion level.
    fn level_metric(&mut self, label: &str, value: &str, level: ExhaustionLevel);

    /// Markers drawn for one category, in the category's marker color.
    fn signal_count(&mut self, kind: SignalKind, reported: Option<&str>, drawn: usize);

    fn chart_title(&mut self, title: &str);

    fn label_error(&mut self, text: impl Into<String>);

    fn label_warning(&mut self, text: impl Into<String>);
}

impl ChartUiExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn signed_metric(&mut self, label: &str, formatted: &str) {
        self.metric(label, formatted, change_color(formatted));
    }

    fn level_metric(&mut self, label: &str, value: &str, level: ExhaustionLevel) {
        self.metric(label, value, exhaustion_color(level));
    }

    fn signal_count(&mut self, kind: SignalKind, reported: Option<&str>, drawn: usize) {
        self.metric(
            &kind.to_string(),
            &signal_count_text(reported, drawn),
            PLOT_CONFIG.signal_color(kind),
        );
    }

    fn chart_title(&mut self, title: &str) {
        self.heading(RichText::new(title).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.negative));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.warning));
    }
}

/// `3 (drawn 2)` when the service reports its own count, else just the drawn count.
pub fn signal_count_text(reported: Option<&str>, drawn: usize) -> String {
    match reported {
        Some(reported) => format!("{} (drawn {})", reported, drawn),
        None => drawn.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_count_text() {
        assert_eq!(signal_count_text(Some("120"), 50), "120 (drawn 50)");
        assert_eq!(signal_count_text(None, 4), "4");
    }
}
