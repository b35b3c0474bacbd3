use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::exhaustion::{self, ExhaustionResult};
use crate::chart::annotations::{AnnotationSet, MAX_SIGNALS};
use crate::chart::transform::{
    AreaFill, ColoredSegment, PolarPoint, area_fill, money_flow_points, project_points,
    stoch_segments,
};
use crate::config::DEBUG_FLAGS;
use crate::domain::TimePoint;
use crate::models::{AnalyzerSnapshot, ChartMeta, FormattedSummary, Indicator};
use crate::utils::maths_utils::finite_min_max;
use crate::utils::time_utils::is_intraday;

/// Everything the viewer draws for one refresh. Built once, then only read.
///
/// Gap samples are NaN, so the derived `==` is not reflexive for a bundle with
/// gaps. Compare serialized bundles to check two builds agree.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartBundle {
    pub meta: ChartMeta,
    pub title: String,
    pub point_count: usize,
    /// Some bar carries a time of day; the x axis then shows hours
    pub intraday: bool,

    // Price panel
    pub price: Vec<TimePoint>,
    /// Finite (min, max) of the price series, for the panel bounds
    pub price_range: Option<(f64, f64)>,

    // Oscillator panel
    pub wt1: Vec<TimePoint>,
    pub wt2: Vec<TimePoint>,
    pub wt_fill: AreaFill,
    pub wt_vwap: Vec<TimePoint>,
    pub rsi: Vec<TimePoint>,
    pub stoch: Vec<ColoredSegment>,

    pub money_flow: Vec<PolarPoint>,

    // Trend exhaust panel. Each is empty when the service didn't compute it.
    pub avg_percent_r: Vec<TimePoint>,
    pub short_percent_r: Vec<TimePoint>,
    pub long_percent_r: Vec<TimePoint>,

    pub annotations: AnnotationSet,
    pub summary: FormattedSummary,
    pub exhaustion: ExhaustionResult,
}

impl ChartBundle {
    pub fn build(snapshot: &AnalyzerSnapshot) -> Self {
        let start = std::time::Instant::now();
        let series = &snapshot.series;
        let dates = series.dates();

        let exhaust = snapshot.trend_exhaust.as_ref();

        let bundle = Self {
            meta: snapshot.meta.clone(),
            title: snapshot.meta.title(),
            point_count: dates.len(),
            intraday: is_intraday(dates),
            price: project_points(dates, series.get(Indicator::Price)),
            price_range: finite_min_max(series.get(Indicator::Price)),
            wt1: project_points(dates, series.get(Indicator::Wt1)),
            wt2: project_points(dates, series.get(Indicator::Wt2)),
            wt_fill: area_fill(dates, series.get(Indicator::Wt1), series.get(Indicator::Wt2)),
            wt_vwap: project_points(dates, series.get(Indicator::WtVwap)),
            rsi: project_points(dates, series.get(Indicator::Rsi)),
            stoch: stoch_segments(dates, series.get(Indicator::Stoch), series.get(Indicator::Rsi)),
            money_flow: money_flow_points(dates, series.get(Indicator::MoneyFlow)),
            avg_percent_r: exhaust
                .map(|te| optional_points(dates, &te.avg_percent_r))
                .unwrap_or_default(),
            short_percent_r: exhaust
                .map(|te| optional_points(dates, &te.short_percent_r))
                .unwrap_or_default(),
            long_percent_r: exhaust
                .map(|te| optional_points(dates, &te.long_percent_r))
                .unwrap_or_default(),
            annotations: AnnotationSet::build(&snapshot.signals, MAX_SIGNALS),
            summary: snapshot.summary.formatted(),
            exhaustion: exhaustion::evaluate(snapshot.trend_exhaust.as_ref()),
        };

        if DEBUG_FLAGS.print_bundle_stats {
            log::info!(
                "Built chart bundle for {}: {} points, {} markers, {} crosses in {:?}",
                bundle.title,
                bundle.point_count,
                bundle.annotations.vertical_markers.len(),
                bundle.annotations.cross_count(),
                start.elapsed()
            );
        }
        bundle
    }

    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    pub fn has_trend_exhaust(&self) -> bool {
        [&self.avg_percent_r, &self.short_percent_r, &self.long_percent_r]
            .iter()
            .any(|series| !series.is_empty())
    }

    /// Plot-space x range of the shared date axis.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let first = self.price.first()?.to_plot()[0];
        let last = self.price.last()?.to_plot()[0];
        Some((first, last))
    }
}

// Trend exhaust series are either aligned with `dates` or empty.
fn optional_points(dates: &[DateTime<Utc>], values: &[f64]) -> Vec<TimePoint> {
    if values.is_empty() {
        Vec::new()
    } else {
        project_points(dates, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::exhaustion::ExhaustionLevel;
    use crate::data::{RawAnalyzerResponse, normalize};
    use crate::domain::Polarity;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> AnalyzerSnapshot {
        normalize(&RawAnalyzerResponse::from_value(value).unwrap()).unwrap()
    }

    #[test]
    fn test_bundle_keeps_alignment() {
        let snap = snapshot(json!({
            "dates": ["2024-01-01", "2024-01-02", "2024-01-03"],
            "price": [10.0, null, 12.0],
            "wt1": [1.0, 2.0, 3.0],
            "wt2": [0.5, 2.5, "x"],
            "stoch": [10.0, 20.0, 30.0],
            "rsi": [15.0, 15.0, 40.0],
            "moneyFlow": [1.0, -1.0, null],
        }));
        let bundle = ChartBundle::build(&snap);
        assert_eq!(bundle.point_count, 3);
        for series in [&bundle.price, &bundle.wt1, &bundle.wt2, &bundle.wt_vwap, &bundle.rsi] {
            assert_eq!(series.len(), 3);
        }
        assert_eq!(bundle.money_flow.len(), 3);
        assert_eq!(bundle.stoch.len(), 2);
        assert_eq!(bundle.stoch[0].polarity, Polarity::Bearish);
        assert_eq!(bundle.stoch[1].polarity, Polarity::Bullish);
        assert_eq!(bundle.price_range, Some((10.0, 12.0)));
        assert!(!bundle.has_trend_exhaust());
        assert_eq!(bundle.exhaustion.level, ExhaustionLevel::NoData);
    }

    #[test]
    fn test_empty_snapshot_builds_empty_bundle() {
        let bundle = ChartBundle::build(&snapshot(json!({ "dates": [] })));
        assert!(bundle.is_empty());
        assert!(bundle.x_bounds().is_none());
        assert!(bundle.stoch.is_empty());
        assert_eq!(bundle.summary.wt1, "0.00");
        assert_eq!(bundle.summary.status, "Neutral zone");
    }

    #[test]
    fn test_trend_exhaust_is_projected() {
        let snap = snapshot(json!({
            "dates": ["2024-01-01", "2024-01-02"],
            "trendExhaust": {
                "avgPercentR": [-50.0, -90.0],
                "signals": { "osReversal": ["2024-01-02"] }
            }
        }));
        let bundle = ChartBundle::build(&snap);
        assert!(bundle.has_trend_exhaust());
        assert_eq!(bundle.avg_percent_r[1].value, -90.0);
        assert!(bundle.short_percent_r.is_empty());
        assert!(bundle.long_percent_r.is_empty());
        assert_eq!(bundle.exhaustion.signal_count, 1);
        assert_eq!(bundle.exhaustion.level, ExhaustionLevel::Critical);
    }

    #[test]
    fn test_short_and_long_percent_r_are_projected() {
        let snap = snapshot(json!({
            "dates": ["2024-01-01 09:30:00", "2024-01-01 10:30:00"],
            "trendExhaust": {
                "shortPercentR": [-10.0, null],
                "longPercentR": [-30.0, -40.0]
            }
        }));
        let bundle = ChartBundle::build(&snap);
        assert!(bundle.intraday);
        assert!(bundle.has_trend_exhaust());
        assert!(bundle.avg_percent_r.is_empty());
        assert_eq!(bundle.short_percent_r.len(), 2);
        assert!(!bundle.short_percent_r[1].is_renderable());
        assert_eq!(bundle.long_percent_r[1].value, -40.0);
    }

    #[test]
    fn test_daily_bundle_is_not_intraday() {
        let bundle = ChartBundle::build(&snapshot(json!({ "dates": ["2024-01-01", "2024-01-02"] })));
        assert!(!bundle.intraday);
    }
}
