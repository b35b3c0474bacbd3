//! Analysis and computation configuration

/// Settings for the signal annotation layer
pub struct SignalSettings {
    // Most recent events kept per category (buy / gold buy / sell) when building markers.
    // Older events stay in the snapshot and its statistics, they just aren't drawn.
    pub max_signals: usize,
}

/// Settings for the exhaustion scorer (avgPercentR, roughly -100..0)
pub struct ExhaustionSettings {
    // Number of trailing samples considered
    pub window: usize,
    // avgPercentR at or above this is the overbought extreme
    pub overbought_level: f64,
    // avgPercentR at or below this is the oversold extreme
    pub oversold_level: f64,
    // Centre of the neutral band
    pub midpoint: f64,
    // Score at the extreme thresholds, and how much it grows per `extreme_span` past them
    pub extreme_base_score: f64,
    pub extreme_span: f64,
    pub extreme_gain: f64,
    // Neutral band: score = base + (|v - midpoint| / half_width) * gain
    pub neutral_base_score: f64,
    pub neutral_half_width: f64,
    pub neutral_gain: f64,
    // Level thresholds (inclusive lower bounds, checked top-down)
    pub critical_threshold: f64,
    pub high_threshold: f64,
    pub moderate_threshold: f64,
    pub low_threshold: f64,
}

/// WaveTrend zone levels used by the status label and the oscillator guide lines
pub struct WaveTrendLevels {
    pub overbought_1: f64,
    pub overbought_2: f64,
    pub oversold_1: f64,
    pub oversold_2: f64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Sub-groups
    pub signals: SignalSettings,
    pub exhaustion: ExhaustionSettings,
    pub wavetrend: WaveTrendLevels,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    signals: SignalSettings { max_signals: 50 },

    exhaustion: ExhaustionSettings {
        window: 10,
        overbought_level: -20.0,
        oversold_level: -80.0,
        midpoint: -50.0,
        extreme_base_score: 70.0,
        extreme_span: 20.0,
        extreme_gain: 30.0,
        neutral_base_score: 20.0,
        neutral_half_width: 30.0,
        neutral_gain: 40.0,
        critical_threshold: 80.0,
        high_threshold: 65.0,
        moderate_threshold: 35.0,
        low_threshold: 20.0,
    },

    wavetrend: WaveTrendLevels {
        overbought_1: 53.0,
        overbought_2: 60.0,
        oversold_1: -53.0,
        oversold_2: -60.0,
    },
};
