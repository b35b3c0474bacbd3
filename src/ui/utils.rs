use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::analysis::exhaustion::ExhaustionLevel;
use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Green for gains, red for losses. Parses the leading sign of formatted text.
pub fn change_color(formatted: &str) -> Color32 {
    if formatted.starts_with('-') {
        UI_CONFIG.colors.negative
    } else {
        UI_CONFIG.colors.positive
    }
}

pub fn exhaustion_color(level: ExhaustionLevel) -> Color32 {
    match level {
        ExhaustionLevel::Critical => Color32::from_rgb(255, 60, 60),
        ExhaustionLevel::High => Color32::from_rgb(255, 140, 0),
        ExhaustionLevel::Moderate => Color32::from_rgb(255, 215, 0),
        ExhaustionLevel::Low => Color32::from_rgb(150, 255, 150),
        ExhaustionLevel::Normal => Color32::from_rgb(100, 200, 100),
        ExhaustionLevel::NoData => Color32::GRAY,
    }
}
