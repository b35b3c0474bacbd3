//! Exhaustion scoring for the trend-exhaust percentile oscillator.
//!
//! `avgPercentR` lives roughly in -100..0. Readings near either end mean the move
//! is stretched; the score maps the latest reading into 0..100 and the level
//! buckets that score for the legend/status widgets.

use serde::{Deserialize, Serialize};

use crate::config::ANALYSIS;
use crate::models::{ExhaustionSignals, TrendExhaust};
use crate::utils::maths_utils::{clamp_f64, last_valid};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum ExhaustionLevel {
    Normal,
    Low,
    Moderate,
    High,
    Critical,
    #[strum(to_string = "No Data")]
    NoData,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ExhaustionResult {
    /// Always within [0, 100]
    pub score: f64,
    pub level: ExhaustionLevel,
    pub signal_count: usize,
}

impl ExhaustionResult {
    pub fn summary_text(&self) -> String {
        if self.level == ExhaustionLevel::NoData {
            return self.level.to_string();
        }
        format!(
            "{:.1} · {} · {} signals",
            self.score, self.level, self.signal_count
        )
    }
}

/// Score of the latest reading in the trailing window, clamped to [0, 100].
/// Absent or empty input scores 0.
pub fn calculate_exhaustion_score(data: Option<&TrendExhaust>) -> f64 {
    match data {
        Some(data) => score_percent_r(&data.avg_percent_r),
        None => MIN_SCORE,
    }
}

/// Same as `calculate_exhaustion_score`, on the bare series.
///
/// A sentinel as the latest sample falls back to the most recent valid sample in
/// the window. A window with no valid sample scores 0.
pub fn score_percent_r(avg_percent_r: &[f64]) -> f64 {
    let start = avg_percent_r
        .len()
        .saturating_sub(ANALYSIS.exhaustion.window);
    let window = &avg_percent_r[start..];
    if window.is_empty() {
        return MIN_SCORE;
    }

    match last_valid(window) {
        Some(latest) => clamp_f64(piecewise_score(latest), MIN_SCORE, MAX_SCORE),
        None => MIN_SCORE,
    }
}

// Extremes start at `extreme_base_score` on the threshold and climb by
// `extreme_gain` for every `extreme_span` further out. The neutral band scales
// the distance from the midpoint into 20..60.
fn piecewise_score(value: f64) -> f64 {
    let cfg = &ANALYSIS.exhaustion;

    if value >= cfg.overbought_level {
        cfg.extreme_base_score
            + ((value - cfg.overbought_level) / cfg.extreme_span) * cfg.extreme_gain
    } else if value <= cfg.oversold_level {
        cfg.extreme_base_score
            + ((cfg.oversold_level - value) / cfg.extreme_span) * cfg.extreme_gain
    } else {
        cfg.neutral_base_score
            + ((value - cfg.midpoint).abs() / cfg.neutral_half_width) * cfg.neutral_gain
    }
}

/// Level for the input's score; `NoData` when the series is absent or empty.
pub fn get_exhaustion_level(data: Option<&TrendExhaust>) -> ExhaustionLevel {
    match data {
        Some(data) if !data.avg_percent_r.is_empty() => {
            level_for_score(score_percent_r(&data.avg_percent_r))
        }
        _ => ExhaustionLevel::NoData,
    }
}

/// Thresholds are inclusive lower bounds, first match wins.
pub fn level_for_score(score: f64) -> ExhaustionLevel {
    let cfg = &ANALYSIS.exhaustion;

    if score >= cfg.critical_threshold {
        ExhaustionLevel::Critical
    } else if score >= cfg.high_threshold {
        ExhaustionLevel::High
    } else if score >= cfg.moderate_threshold {
        ExhaustionLevel::Moderate
    } else if score >= cfg.low_threshold {
        ExhaustionLevel::Low
    } else {
        ExhaustionLevel::Normal
    }
}

/// Reversals plus crosses. No deduplication: a date listed in two categories counts twice.
pub fn count_exhaustion_signals(signals: Option<&ExhaustionSignals>) -> usize {
    let Some(signals) = signals else {
        return 0;
    };

    [
        &signals.ob_reversal,
        &signals.os_reversal,
        &signals.bull_cross,
        &signals.bear_cross,
    ]
    .into_iter()
    .map(|list| list.as_ref().map_or(0, Vec::len))
    .sum()
}

/// All three values at once.
pub fn evaluate(data: Option<&TrendExhaust>) -> ExhaustionResult {
    ExhaustionResult {
        score: calculate_exhaustion_score(data),
        level: get_exhaustion_level(data),
        signal_count: count_exhaustion_signals(data.map(|d| &d.signals)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exhaust(avg_percent_r: Vec<f64>) -> TrendExhaust {
        TrendExhaust {
            avg_percent_r,
            ..Default::default()
        }
    }

    fn dates(n: usize) -> Option<Vec<String>> {
        Some((0..n).map(|i| format!("2024-01-{:02}", i + 1)).collect())
    }

    #[test]
    fn test_overbought_branch() {
        let data = exhaust(vec![-60.0, -40.0, -15.0]);
        let score = calculate_exhaustion_score(Some(&data));
        assert!(score >= 70.0);
        assert!((score - 77.5).abs() < 1e-9);
    }

    #[test]
    fn test_oversold_branch_is_symmetric() {
        let data = exhaust(vec![-50.0, -85.0]);
        let score = calculate_exhaustion_score(Some(&data));
        assert!(score >= 70.0);
        assert!((score - 77.5).abs() < 1e-9);
        assert_eq!(
            score,
            calculate_exhaustion_score(Some(&exhaust(vec![-15.0])))
        );
    }

    #[test]
    fn test_midpoint_scores_twenty() {
        let data = exhaust(vec![-10.0, -50.0]);
        assert_eq!(calculate_exhaustion_score(Some(&data)), 20.0);
        assert_eq!(get_exhaustion_level(Some(&data)), ExhaustionLevel::Low);
    }

    #[test]
    fn test_thresholds_start_at_seventy() {
        assert_eq!(score_percent_r(&[-20.0]), 70.0);
        assert_eq!(score_percent_r(&[-80.0]), 70.0);
        let inside = score_percent_r(&[-21.0]);
        assert!((inside - (20.0 + 29.0 / 30.0 * 40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(score_percent_r(&[0.0]), 100.0);
        assert_eq!(score_percent_r(&[-100.0]), 100.0);
        assert_eq!(score_percent_r(&[25.0]), 100.0);
        assert_eq!(score_percent_r(&[-160.0]), 100.0);
        for v in [-120.0, -90.0, -65.0, -50.0, -35.0, -5.0, 3.0] {
            let score = score_percent_r(&[v]);
            assert!((MIN_SCORE..=MAX_SCORE).contains(&score), "{} -> {}", v, score);
        }
    }

    #[test]
    fn test_empty_or_absent_input() {
        let empty = exhaust(Vec::new());
        assert_eq!(calculate_exhaustion_score(Some(&empty)), 0.0);
        assert_eq!(get_exhaustion_level(Some(&empty)), ExhaustionLevel::NoData);
        assert_eq!(calculate_exhaustion_score(None), 0.0);
        assert_eq!(get_exhaustion_level(None), ExhaustionLevel::NoData);

        let result = evaluate(None);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.level, ExhaustionLevel::NoData);
        assert_eq!(result.signal_count, 0);
        assert_eq!(result.summary_text(), "No Data");
    }

    #[test]
    fn test_sentinel_latest_carries_previous_reading() {
        assert_eq!(score_percent_r(&[-50.0, f64::NAN, f64::NAN]), 20.0);
        // Nothing valid inside the window
        let mut series = vec![-15.0];
        series.extend(std::iter::repeat_n(f64::NAN, 10));
        assert_eq!(score_percent_r(&series), 0.0);
        assert_eq!(
            get_exhaustion_level(Some(&exhaust(series))),
            ExhaustionLevel::Normal
        );
    }

    #[test]
    fn test_only_trailing_window_counts() {
        // The valid extreme sits outside the last 10 samples
        let mut series = vec![-15.0];
        series.extend(std::iter::repeat_n(-50.0, 10));
        assert_eq!(score_percent_r(&series), 20.0);
    }

    #[test]
    fn test_score_is_pure() {
        let data = exhaust(vec![-33.0, -71.0, -92.5]);
        let first = evaluate(Some(&data));
        let second = evaluate(Some(&data));
        assert_eq!(first, second);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_score(80.0), ExhaustionLevel::Critical);
        assert_eq!(level_for_score(79.999), ExhaustionLevel::High);
        assert_eq!(level_for_score(65.0), ExhaustionLevel::High);
        assert_eq!(level_for_score(64.999), ExhaustionLevel::Moderate);
        assert_eq!(level_for_score(35.0), ExhaustionLevel::Moderate);
        assert_eq!(level_for_score(20.0), ExhaustionLevel::Low);
        assert_eq!(level_for_score(19.999), ExhaustionLevel::Normal);
        assert_eq!(level_for_score(0.0), ExhaustionLevel::Normal);
        assert_eq!(level_for_score(100.0), ExhaustionLevel::Critical);
    }

    #[test]
    fn test_count_signals() {
        let signals = ExhaustionSignals {
            ob_reversal: Some(vec!["1".into(), "2".into()]),
            os_reversal: Some(vec!["3".into()]),
            bull_cross: Some(vec!["4".into(), "5".into()]),
            bear_cross: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(count_exhaustion_signals(Some(&signals)), 5);
        assert_eq!(count_exhaustion_signals(None), 0);
    }

    #[test]
    fn test_count_ignores_zone_lists_and_absent_lists() {
        let signals = ExhaustionSignals {
            overbought: dates(7),
            oversold: dates(3),
            bull_cross: dates(1),
            ..Default::default()
        };
        assert_eq!(count_exhaustion_signals(Some(&signals)), 1);
    }

    #[test]
    fn test_count_does_not_deduplicate() {
        let shared = Some(vec!["2024-02-01".to_string()]);
        let signals = ExhaustionSignals {
            ob_reversal: shared.clone(),
            bear_cross: shared,
            ..Default::default()
        };
        assert_eq!(count_exhaustion_signals(Some(&signals)), 2);
    }

    #[test]
    fn test_evaluate_combines() {
        let data = TrendExhaust {
            avg_percent_r: vec![-40.0, -95.0],
            signals: ExhaustionSignals {
                os_reversal: dates(2),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = evaluate(Some(&data));
        // 70 + (15 / 20) * 30
        assert!((result.score - 92.5).abs() < 1e-9);
        assert_eq!(result.level, ExhaustionLevel::Critical);
        assert_eq!(result.signal_count, 2);
        assert_eq!(result.summary_text(), "92.5 · Critical · 2 signals");
    }
}
