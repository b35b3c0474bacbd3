/// Every user-facing label in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub summary_heading: &'static str,
    pub signals_heading: &'static str,
    pub exhaustion_heading: &'static str,
    pub layers_heading: &'static str,
    pub label_wt1: &'static str,
    pub label_wt2: &'static str,
    pub label_money_flow: &'static str,
    pub label_price: &'static str,
    pub label_change: &'static str,
    pub label_last_update: &'static str,
    pub label_status: &'static str,
    pub label_score: &'static str,
    pub label_level: &'static str,
    pub label_exhaust_signals: &'static str,
    pub label_crosses: &'static str,
    pub label_skipped: &'static str,
    pub label_vwap: &'static str,
    pub label_rsi: &'static str,
    pub label_stoch: &'static str,
    pub label_wt_fill: &'static str,
    pub label_avg_percent_r: &'static str,
    pub label_short_percent_r: &'static str,
    pub label_long_percent_r: &'static str,
    pub label_divergences: &'static str,
    pub label_patterns: &'static str,
    pub label_zone_levels: &'static str,
    pub label_overbought: &'static str,
    pub label_oversold: &'static str,
    pub button_reload: &'static str,
    pub plot_price: &'static str,
    pub plot_oscillator: &'static str,
    pub plot_money_flow: &'static str,
    pub plot_exhaust: &'static str,
    pub status_loading: &'static str,
    pub status_no_data: &'static str,
    pub status_no_exhaust: &'static str,
    pub status_refreshing: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "WaveTrend Chart",
    summary_heading: "Summary",
    signals_heading: "Signals",
    exhaustion_heading: "Trend Exhaust",
    layers_heading: "Layers",
    label_wt1: "WT1",
    label_wt2: "WT2",
    label_money_flow: "Money Flow",
    label_price: "Price",
    label_change: "Change",
    label_last_update: "Updated",
    label_status: "Status",
    label_score: "Score",
    label_level: "Level",
    label_exhaust_signals: "Signals",
    label_crosses: "Crosses",
    label_skipped: "Skipped events",
    label_vwap: "VWAP",
    label_rsi: "RSI",
    label_stoch: "Stoch RSI",
    label_wt_fill: "WT Band",
    label_avg_percent_r: "Avg %R",
    label_short_percent_r: "Short %R",
    label_long_percent_r: "Long %R",
    label_divergences: "Divergences",
    label_patterns: "Patterns",
    label_zone_levels: "Zone levels",
    label_overbought: "Overbought",
    label_oversold: "Oversold",
    button_reload: "⟳ Reload",
    plot_price: "Price",
    plot_oscillator: "WaveTrend",
    plot_money_flow: "Money Flow",
    plot_exhaust: "Trend Exhaust",
    status_loading: "Loading analyzer response…",
    status_no_data: "No data for this symbol",
    status_no_exhaust: "Trend exhaust not computed",
    status_refreshing: "⚙ Refreshing…",
};
