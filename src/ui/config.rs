use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub value: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub warning: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    /// Plot x-axis group shared by the four panels
    pub link_group: &'static str,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        central_panel: Color32::from_rgb(18, 18, 24),
        side_panel: Color32::from_rgb(25, 25, 25),
        value: Color32::from_rgb(180, 200, 255),
        positive: Color32::from_rgb(100, 200, 100),
        negative: Color32::from_rgb(255, 100, 100),
        warning: Color32::from_rgb(255, 215, 0),
    },
    side_panel_min_width: 200.0,
    link_group: "wavetrend_x",
};
