//! Plot visualization configuration

use eframe::egui::Color32;

use crate::domain::{FlowPolarity, Polarity, SignalFamily, SignalKind};

pub struct PlotConfig {
    pub price_color: Color32,
    pub wt1_color: Color32,
    pub wt2_color: Color32,
    pub wt_fill_color: Color32,
    pub vwap_color: Color32,
    pub rsi_color: Color32,
    // StochRSI segment colors (compared against RSI per segment)
    pub stoch_bullish_color: Color32,
    pub stoch_bearish_color: Color32,
    // Money flow line + fill, chosen per point by sign
    pub mf_positive_color: Color32,
    pub mf_negative_color: Color32,
    pub buy_color: Color32,
    pub gold_buy_color: Color32,
    pub sell_color: Color32,
    pub cross_red_color: Color32,
    pub cross_green_color: Color32,
    pub level_line_color: Color32,
    pub divergence_bull_color: Color32,
    pub divergence_bear_color: Color32,
    pub pattern_buy_color: Color32,
    pub pattern_sell_color: Color32,
    pub exhaust_color: Color32,
    pub short_percent_r_color: Color32,
    pub long_percent_r_color: Color32,
    /// Fixed y of buy / gold-buy markers on the oscillator (below the -100 floor)
    pub buy_marker_offset: f64,
    /// Fixed y of sell markers on the oscillator (above the +100 ceiling)
    pub sell_marker_offset: f64,
    /// |y| of divergence markers, signed by polarity
    pub divergence_marker_offset: f64,
    /// |y| of pattern markers, signed by polarity
    pub pattern_marker_offset: f64,
    pub signal_marker_radius: f32,
    pub gold_marker_radius: f32,
    pub cross_marker_radius: f32,
    pub secondary_marker_radius: f32,
    pub line_width: f32,
    pub thin_line_width: f32,
    /// Opacity of fills (0.0 = invisible, 1.0 = fully opaque)
    pub fill_opacity_pct: f32,
    /// Opacity of the vertical signal lines on the price chart
    pub marker_line_opacity_pct: f32,
    pub price_plot_height: f32,
    pub oscillator_plot_height: f32,
    pub money_flow_plot_height: f32,
    pub exhaust_plot_height: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_color: Color32::from_rgb(200, 200, 200),
    wt1_color: Color32::from_rgb(235, 235, 235),
    wt2_color: Color32::from_rgb(70, 100, 170),
    wt_fill_color: Color32::from_rgb(90, 120, 200),
    vwap_color: Color32::from_rgb(255, 229, 0), // #ffe500
    rsi_color: Color32::from_rgb(217, 0, 255), // #d900ff
    stoch_bullish_color: Color32::from_rgb(34, 255, 0), // #22ff00
    stoch_bearish_color: Color32::from_rgb(255, 0, 0),
    mf_positive_color: Color32::from_rgb(60, 255, 0), // #3cff00
    mf_negative_color: Color32::from_rgb(255, 17, 0), // #ff1100
    buy_color: Color32::from_rgb(63, 255, 0), // #3fff00
    gold_buy_color: Color32::from_rgb(226, 164, 0), // #e2a400
    sell_color: Color32::from_rgb(255, 82, 82), // #ff5252
    cross_red_color: Color32::from_rgb(255, 82, 82),
    cross_green_color: Color32::from_rgb(63, 255, 0),
    level_line_color: Color32::GRAY,
    divergence_bull_color: Color32::from_rgb(0, 230, 180),
    divergence_bear_color: Color32::from_rgb(255, 120, 200),
    pattern_buy_color: Color32::from_rgb(120, 200, 255),
    pattern_sell_color: Color32::from_rgb(255, 170, 60),
    exhaust_color: Color32::from_rgb(0, 191, 255), // Deep sky blue
    short_percent_r_color: Color32::from_rgb(120, 120, 160),
    long_percent_r_color: Color32::from_rgb(160, 120, 120),
    buy_marker_offset: -107.0,
    sell_marker_offset: 107.0,
    divergence_marker_offset: 100.0,
    pattern_marker_offset: 93.0,
    signal_marker_radius: 4.0,
    gold_marker_radius: 6.0,
    cross_marker_radius: 3.0,
    secondary_marker_radius: 3.0,
    line_width: 2.0,
    thin_line_width: 1.0,
    fill_opacity_pct: 0.3,
    marker_line_opacity_pct: 0.5,
    price_plot_height: 260.0,
    oscillator_plot_height: 260.0,
    money_flow_plot_height: 140.0,
    exhaust_plot_height: 140.0,
};

impl PlotConfig {
    pub fn signal_color(&self, kind: SignalKind) -> Color32 {
        let bullish = kind.polarity() != Some(Polarity::Bearish);
        match (kind.family(), bullish) {
            (SignalFamily::Divergence, true) => self.divergence_bull_color,
            (SignalFamily::Divergence, false) => self.divergence_bear_color,
            (SignalFamily::Pattern, true) => self.pattern_buy_color,
            (SignalFamily::Pattern, false) => self.pattern_sell_color,
            (SignalFamily::Cross, _) => self.cross_green_color,
            (SignalFamily::Primary, _) => match kind {
                SignalKind::GoldBuy => self.gold_buy_color,
                _ if bullish => self.buy_color,
                _ => self.sell_color,
            },
        }
    }

    pub fn signal_marker_radius(&self, kind: SignalKind) -> f32 {
        match kind.family() {
            SignalFamily::Primary if kind == SignalKind::GoldBuy => self.gold_marker_radius,
            SignalFamily::Primary => self.signal_marker_radius,
            SignalFamily::Cross => self.cross_marker_radius,
            SignalFamily::Divergence | SignalFamily::Pattern => self.secondary_marker_radius,
        }
    }

    /// Fixed y-position of a category's point markers on the oscillator.
    /// Bullish kinds sit below the floor, bearish ones above the ceiling.
    pub fn marker_offset(&self, kind: SignalKind) -> Option<f64> {
        let (below, above) = match kind.family() {
            SignalFamily::Primary => (self.buy_marker_offset, self.sell_marker_offset),
            SignalFamily::Divergence => {
                (-self.divergence_marker_offset, self.divergence_marker_offset)
            }
            SignalFamily::Pattern => (-self.pattern_marker_offset, self.pattern_marker_offset),
            // Crosses are drawn at their own value
            SignalFamily::Cross => return None,
        };
        match kind.polarity()? {
            Polarity::Bullish => Some(below),
            Polarity::Bearish => Some(above),
        }
    }

    pub fn stoch_color(&self, polarity: Polarity) -> Color32 {
        match polarity {
            Polarity::Bullish => self.stoch_bullish_color,
            Polarity::Bearish => self.stoch_bearish_color,
        }
    }

    pub fn cross_color(&self, polarity: Polarity) -> Color32 {
        match polarity {
            Polarity::Bullish => self.cross_green_color,
            Polarity::Bearish => self.cross_red_color,
        }
    }

    pub fn money_flow_color(&self, polarity: FlowPolarity) -> Color32 {
        match polarity {
            FlowPolarity::Positive => self.mf_positive_color,
            FlowPolarity::Negative => self.mf_negative_color,
        }
    }
}
