//! Chart data transformer: aligned series -> point sequences.
//!
//! Every output keeps one slot per input sample. Sentinel samples stay in the
//! sequence as non-renderable points; the renderer splits lines at them.

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::{FlowPolarity, Polarity, TimePoint};
use crate::utils::maths_utils::valid;

/// `(dates[i], values[i])` for every index. Never shortens the sequence.
pub fn project_points(dates: &[DateTime<Utc>], values: &[f64]) -> Vec<TimePoint> {
    debug_assert_eq!(dates.len(), values.len(), "series must be aligned with dates");
    dates
        .iter()
        .zip(values)
        .map(|(timestamp, value)| TimePoint::new(*timestamp, *value))
        .collect()
}

// ============================================================================
// Area fill between WT1 and WT2
// ============================================================================

/// The band drawn beneath the WaveTrend lines: `line` (WT1) filled down/up to `base` (WT2).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AreaFill {
    pub line: Vec<TimePoint>,
    pub base: Vec<TimePoint>,
}

/// Baseline companion series of the fill: WT2's values on the shared axis.
pub fn area_fill_base(dates: &[DateTime<Utc>], wt2: &[f64]) -> Vec<TimePoint> {
    project_points(dates, wt2)
}

pub fn area_fill(dates: &[DateTime<Utc>], wt1: &[f64], wt2: &[f64]) -> AreaFill {
    AreaFill {
        line: project_points(dates, wt1),
        base: area_fill_base(dates, wt2),
    }
}

impl AreaFill {
    /// Quads `[line[i-1], line[i], base[i], base[i-1]]` where all four corners are renderable.
    pub fn quads(&self) -> Vec<[[f64; 2]; 4]> {
        self.line
            .iter()
            .zip(&self.base)
            .tuple_windows()
            .filter(|((l0, b0), (l1, b1))| {
                l0.is_renderable() && b0.is_renderable() && l1.is_renderable() && b1.is_renderable()
            })
            .map(|((l0, b0), (l1, b1))| [l0.to_plot(), l1.to_plot(), b1.to_plot(), b0.to_plot()])
            .collect()
    }
}

// ============================================================================
// Per-segment / per-point coloring
// ============================================================================

/// Runs `classify` over `indices`, carrying the previous state forward whenever it
/// returns `None` (a sentinel was involved). The first state defaults to `initial`.
pub fn color_by<S, F>(indices: impl IntoIterator<Item = usize>, initial: S, mut classify: F) -> Vec<S>
where
    S: Copy,
    F: FnMut(usize) -> Option<S>,
{
    let mut current = initial;
    indices
        .into_iter()
        .map(|i| {
            if let Some(state) = classify(i) {
                current = state;
            }
            current
        })
        .collect()
}

/// One drawable piece of a comparison-colored line.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColoredSegment {
    pub from: TimePoint,
    pub to: TimePoint,
    pub polarity: Polarity,
}

impl ColoredSegment {
    pub fn is_renderable(&self) -> bool {
        self.from.is_renderable() && self.to.is_renderable()
    }
}

/// Segment `i` joins point `i-1` to point `i` and takes its color from
/// `strategy(i)`, i.e. the later endpoint. `N` points give `N-1` segments.
pub fn color_segments<F>(points: &[TimePoint], strategy: F) -> Vec<ColoredSegment>
where
    F: FnMut(usize) -> Option<Polarity>,
{
    let colors = color_by(1..points.len(), Polarity::Bullish, strategy);
    points
        .iter()
        .tuple_windows()
        .zip(colors)
        .map(|((from, to), polarity)| ColoredSegment {
            from: *from,
            to: *to,
            polarity,
        })
        .collect()
}

/// StochRSI below RSI is bullish, otherwise bearish. `None` if either side is a gap.
pub fn stoch_vs_rsi<'a>(stoch: &'a [f64], rsi: &'a [f64]) -> impl FnMut(usize) -> Option<Polarity> + 'a {
    move |i| {
        let stoch = stoch.get(i).copied().and_then(valid)?;
        let rsi = rsi.get(i).copied().and_then(valid)?;
        Some(if stoch < rsi {
            Polarity::Bullish
        } else {
            Polarity::Bearish
        })
    }
}

pub fn stoch_segments(dates: &[DateTime<Utc>], stoch: &[f64], rsi: &[f64]) -> Vec<ColoredSegment> {
    let points = project_points(dates, stoch);
    color_segments(&points, stoch_vs_rsi(stoch, rsi))
}

/// A money-flow point with its own fill polarity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub point: TimePoint,
    pub polarity: FlowPolarity,
}

/// Polarity by each point's own sign; gaps keep the previous polarity.
pub fn money_flow_points(dates: &[DateTime<Utc>], money_flow: &[f64]) -> Vec<PolarPoint> {
    let points = project_points(dates, money_flow);
    let polarities = color_by(0..points.len(), FlowPolarity::Positive, |i| {
        valid(points[i].value).map(FlowPolarity::of)
    });
    points
        .into_iter()
        .zip(polarities)
        .map(|(point, polarity)| PolarPoint { point, polarity })
        .collect()
}

// ============================================================================
// Rendering helpers
// ============================================================================

/// Contiguous runs of renderable points in plot space, so gaps aren't bridged.
pub fn finite_runs(points: &[TimePoint]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for point in points {
        if point.is_renderable() {
            current.push(point.to_plot());
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Merges consecutive renderable segments of the same state into polylines.
/// A gap or a change of state starts a new run.
pub fn runs_by<S: Copy + PartialEq>(
    segments: impl IntoIterator<Item = (TimePoint, TimePoint, S)>,
) -> Vec<(S, Vec<[f64; 2]>)> {
    let mut runs: Vec<(S, Vec<[f64; 2]>)> = Vec::new();
    let mut last_to: Option<TimePoint> = None;
    for (from, to, state) in segments {
        if !(from.is_renderable() && to.is_renderable()) {
            last_to = None;
            continue;
        }
        match runs.last_mut() {
            Some((run_state, run)) if *run_state == state && last_to == Some(from) => {
                run.push(to.to_plot());
            }
            _ => runs.push((state, vec![from.to_plot(), to.to_plot()])),
        }
        last_to = Some(to);
    }
    runs
}

pub fn stoch_runs(segments: &[ColoredSegment]) -> Vec<(Polarity, Vec<[f64; 2]>)> {
    runs_by(segments.iter().map(|s| (s.from, s.to, s.polarity)))
}

/// Money-flow polylines; each step takes the polarity of its later point.
pub fn money_flow_runs(points: &[PolarPoint]) -> Vec<(FlowPolarity, Vec<[f64; 2]>)> {
    runs_by(
        points
            .iter()
            .tuple_windows()
            .map(|(a, b)| (a.point, b.point, b.polarity)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    const NAN: f64 = f64::NAN;

    fn dates(n: usize) -> Vec<DateTime<Utc>> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..n).map(|i| start + Duration::days(i as i64)).collect()
    }

    #[test]
    fn test_projection_keeps_every_index() {
        let d = dates(5);
        let values = [1.0, NAN, 3.0, NAN, 5.0];
        let points = project_points(&d, &values);
        assert_eq!(points.len(), 5);
        for (i, point) in points.iter().enumerate() {
            assert_eq!(point.timestamp, d[i]);
        }
        assert!(!points[1].is_renderable());
        assert_eq!(points[4].value, 5.0);
    }

    #[test]
    fn test_empty_series() {
        assert!(project_points(&[], &[]).is_empty());
        assert!(stoch_segments(&[], &[], &[]).is_empty());
        assert!(money_flow_points(&[], &[]).is_empty());
        assert!(area_fill(&[], &[], &[]).quads().is_empty());
    }

    #[test]
    fn test_all_sentinel_series_is_not_shortened() {
        let d = dates(4);
        let points = project_points(&d, &[NAN; 4]);
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| !p.is_renderable()));
        assert!(finite_runs(&points).is_empty());
    }

    #[test]
    fn test_area_fill_base_uses_wt2() {
        let d = dates(3);
        let fill = area_fill(&d, &[5.0, 6.0, 7.0], &[1.0, NAN, 3.0]);
        assert_eq!(fill.base.len(), 3);
        assert_eq!(fill.base[2].value, 3.0);
        assert_eq!(fill.line[0].value, 5.0);
        // Both quads touch the WT2 gap
        assert!(fill.quads().is_empty());

        let fill = area_fill(&d, &[5.0, 6.0, 7.0], &[1.0, 2.0, 3.0]);
        let quads = fill.quads();
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0][0][1], 5.0);
        assert_eq!(quads[0][2][1], 2.0);
    }

    #[test]
    fn test_segment_takes_later_endpoint_color() {
        let d = dates(2);
        let segments = stoch_segments(&d, &[10.0, 20.0], &[15.0, 15.0]);
        assert_eq!(segments.len(), 1);
        // 20 < 15 is false at the later endpoint
        assert_eq!(segments[0].polarity, Polarity::Bearish);
    }

    #[test]
    fn test_adjacent_segments_can_differ() {
        let d = dates(4);
        let segments = stoch_segments(&d, &[50.0, 10.0, 90.0, 20.0], &[40.0, 40.0, 40.0, 40.0]);
        let colors: Vec<Polarity> = segments.iter().map(|s| s.polarity).collect();
        assert_eq!(colors, vec![Polarity::Bullish, Polarity::Bearish, Polarity::Bullish]);
    }

    #[test]
    fn test_sentinel_keeps_previous_segment_color() {
        let d = dates(4);
        // Segment 1 is a gap at the start: default bullish
        let segments = stoch_segments(&d, &[10.0, NAN, 30.0, 35.0], &[20.0, 20.0, 20.0, NAN]);
        let colors: Vec<Polarity> = segments.iter().map(|s| s.polarity).collect();
        assert_eq!(colors, vec![Polarity::Bullish, Polarity::Bearish, Polarity::Bearish]);
        assert!(!segments[0].is_renderable());
        assert!(segments[1].to.is_renderable());
    }

    #[test]
    fn test_color_by_with_custom_strategy() {
        let states = color_by(0..5, 'a', |i| if i % 2 == 0 { Some('x') } else { None });
        assert_eq!(states, vec!['x', 'x', 'x', 'x', 'x']);
        let states = color_by(0..3, 'a', |i| if i == 1 { Some('b') } else { None });
        assert_eq!(states, vec!['a', 'b', 'b']);
    }

    #[test]
    fn test_money_flow_polarity_per_point() {
        let d = dates(6);
        let points = money_flow_points(&d, &[1.0, -2.0, 0.0, NAN, -1.0, NAN]);
        let polarities: Vec<FlowPolarity> = points.iter().map(|p| p.polarity).collect();
        assert_eq!(
            polarities,
            vec![
                FlowPolarity::Positive,
                FlowPolarity::Negative,
                FlowPolarity::Positive,
                FlowPolarity::Positive,
                FlowPolarity::Negative,
                FlowPolarity::Negative,
            ]
        );
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn test_finite_runs_split_at_gaps() {
        let d = dates(5);
        let points = project_points(&d, &[1.0, NAN, 2.0, 3.0, NAN]);
        let runs = finite_runs(&points);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 1);
        assert_eq!(runs[1].len(), 2);
        assert_eq!(runs[1][1][1], 3.0);
    }

    #[test]
    fn test_runs_merge_same_state_and_break_at_gaps() {
        let d = dates(6);
        let segments = stoch_segments(
            &d,
            &[10.0, 11.0, 12.0, 50.0, NAN, 13.0],
            &[40.0, 40.0, 40.0, 40.0, 40.0, 40.0],
        );
        let runs = stoch_runs(&segments);
        // bullish 0..=2, bearish 2..=3, then the gap splits the rest off
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].0, Polarity::Bullish);
        assert_eq!(runs[0].1.len(), 3);
        assert_eq!(runs[1].0, Polarity::Bearish);
        assert_eq!(runs[1].1.len(), 2);
    }

    #[test]
    fn test_money_flow_runs_follow_sign() {
        let d = dates(5);
        let points = money_flow_points(&d, &[1.0, 2.0, -1.0, -2.0, 3.0]);
        let runs = money_flow_runs(&points);
        let states: Vec<FlowPolarity> = runs.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            states,
            vec![FlowPolarity::Positive, FlowPolarity::Negative, FlowPolarity::Positive]
        );
        assert_eq!(runs[1].1.len(), 3);
    }
}
