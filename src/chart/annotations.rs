//! Signal annotations: bounded vertical markers plus fixed-offset marker groups.
//! Divergences and patterns are capped the same way but only get a marker group.
//!
//! Every build starts from nothing, so repeated refreshes never accumulate
//! markers from earlier fetches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::config::{ANALYSIS, DEBUG_FLAGS, PLOT_CONFIG};
use crate::domain::{
    CrossEvent, Polarity, SignalFamily, SignalKind, SignalSet, TimePoint, Timestamped,
};
use crate::utils::time_utils::parse_timestamp;

pub const MAX_SIGNALS: usize = ANALYSIS.signals.max_signals;

/// The `cap` most recent events, oldest first. Ties keep input order.
pub fn most_recent<T: Timestamped + Clone>(events: &[T], cap: usize) -> Vec<T> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.timestamp());
    let start = sorted.len().saturating_sub(cap);
    sorted.split_off(start)
}

/// A labeled vertical line across the price chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerticalMarker {
    pub timestamp: DateTime<Utc>,
    pub kind: SignalKind,
    pub label: String,
}

impl Timestamped for VerticalMarker {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// One named scatter series on the oscillator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarkerGroup {
    pub name: String,
    pub kind: SignalKind,
    /// Only set for the two cross groups
    pub polarity: Option<Polarity>,
    pub points: Vec<TimePoint>,
}

impl MarkerGroup {
    fn empty_cross_group(polarity: Polarity) -> Self {
        let name = match polarity {
            Polarity::Bearish => "Sell-polarity crosses",
            Polarity::Bullish => "Buy-polarity crosses",
        };
        Self {
            name: name.to_string(),
            kind: SignalKind::Cross,
            polarity: Some(polarity),
            points: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnnotationSet {
    pub vertical_markers: Vec<VerticalMarker>,
    /// One group per capped category, in `SignalKind::CAPPED` order
    pub marker_groups: Vec<MarkerGroup>,
    /// Divergence and pattern groups, one per list present in the response
    pub secondary_groups: Vec<MarkerGroup>,
    pub red_crosses: MarkerGroup,
    pub green_crosses: MarkerGroup,
    /// Events dropped for an unparseable timestamp
    pub skipped: usize,
}

impl Default for AnnotationSet {
    fn default() -> Self {
        Self {
            vertical_markers: Vec::new(),
            marker_groups: Vec::new(),
            secondary_groups: Vec::new(),
            red_crosses: MarkerGroup::empty_cross_group(Polarity::Bearish),
            green_crosses: MarkerGroup::empty_cross_group(Polarity::Bullish),
            skipped: 0,
        }
    }
}

fn offset_group(kind: SignalKind, kept: &[VerticalMarker]) -> MarkerGroup {
    let offset = PLOT_CONFIG.marker_offset(kind).unwrap_or_default();
    MarkerGroup {
        name: format!("{} signals", kind),
        kind,
        polarity: None,
        points: kept
            .iter()
            .map(|marker| TimePoint::new(marker.timestamp, offset))
            .collect(),
    }
}

impl AnnotationSet {
    pub fn build(signals: &SignalSet, cap: usize) -> Self {
        let mut set = Self::default();

        for kind in SignalKind::iter().filter(|k| SignalKind::CAPPED.contains(k)) {
            let kept = set.capped_markers(signals, kind, cap);
            set.marker_groups.push(offset_group(kind, &kept));
            set.vertical_markers.extend(kept);
        }

        // Divergences and patterns get a marker group only
        for &kind in signals.secondary.keys() {
            let kept = set.capped_markers(signals, kind, cap);
            set.secondary_groups.push(offset_group(kind, &kept));
        }

        let (red, green): (Vec<&CrossEvent>, Vec<&CrossEvent>) =
            signals.cross.iter().partition(|cross| cross.is_red);
        let red_points = set.cross_points(&red);
        let green_points = set.cross_points(&green);
        set.red_crosses.points = red_points;
        set.green_crosses.points = green_points;

        if set.skipped > 0 {
            log::warn!("{} signal events skipped for bad timestamps", set.skipped);
        }
        set
    }

    // Parses one category and keeps its `cap` most recent events.
    fn capped_markers(
        &mut self,
        signals: &SignalSet,
        kind: SignalKind,
        cap: usize,
    ) -> Vec<VerticalMarker> {
        let markers: Vec<VerticalMarker> = signals
            .events(kind)
            .iter()
            .filter_map(|event| match parse_timestamp(&event.date) {
                Some(timestamp) => Some(VerticalMarker {
                    timestamp,
                    kind,
                    label: kind.to_string(),
                }),
                None => {
                    log::warn!("Skipping {} signal with unparseable date {:?}", kind, event.date);
                    self.skipped += 1;
                    None
                }
            })
            .collect();

        let kept = most_recent(&markers, cap);
        if DEBUG_FLAGS.print_capped_events && kept.len() < markers.len() {
            log::debug!("{}: keeping {} of {} signals", kind, kept.len(), markers.len());
        }
        kept
    }

    fn cross_points(&mut self, crosses: &[&CrossEvent]) -> Vec<TimePoint> {
        crosses
            .iter()
            .filter_map(|cross| match parse_timestamp(&cross.date) {
                Some(timestamp) => Some(TimePoint::new(timestamp, cross.value)),
                None => {
                    log::warn!("Skipping cross with unparseable date {:?}", cross.date);
                    self.skipped += 1;
                    None
                }
            })
            .collect()
    }

    pub fn group(&self, kind: SignalKind) -> Option<&MarkerGroup> {
        self.marker_groups
            .iter()
            .chain(&self.secondary_groups)
            .find(|group| group.kind == kind)
    }

    /// Secondary groups of one family, in `SignalKind` order.
    pub fn secondary_of(&self, family: SignalFamily) -> impl Iterator<Item = &MarkerGroup> {
        self.secondary_groups
            .iter()
            .filter(move |group| group.kind.family() == family)
    }

    pub fn markers_of(&self, kind: SignalKind) -> impl Iterator<Item = &VerticalMarker> {
        self.vertical_markers.iter().filter(move |marker| marker.kind == kind)
    }

    pub fn cross_count(&self) -> usize {
        self.red_crosses.points.len() + self.green_crosses.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SignalEvent;
    use chrono::{Duration, TimeZone};

    fn day(i: i64) -> String {
        let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        (start + Duration::days(i)).format("%Y-%m-%d").to_string()
    }

    fn events(kind: SignalKind, days: impl IntoIterator<Item = i64>) -> Vec<SignalEvent> {
        days.into_iter()
            .map(|i| SignalEvent { kind, date: day(i) })
            .collect()
    }

    fn cross(i: i64, value: f64, is_red: bool) -> CrossEvent {
        CrossEvent {
            date: day(i),
            value,
            is_red,
        }
    }

    #[test]
    fn test_cap_keeps_most_recent() {
        let signals = SignalSet {
            buy: events(SignalKind::Buy, 0..120),
            ..Default::default()
        };
        let set = AnnotationSet::build(&signals, MAX_SIGNALS);
        let buys: Vec<&VerticalMarker> = set.markers_of(SignalKind::Buy).collect();
        assert_eq!(buys.len(), 50);
        assert_eq!(buys[0].timestamp, parse_timestamp(&day(70)).unwrap());
        assert_eq!(buys[49].timestamp, parse_timestamp(&day(119)).unwrap());
        assert_eq!(set.group(SignalKind::Buy).unwrap().points.len(), 50);
    }

    #[test]
    fn test_cap_sorts_unordered_input() {
        let mut days: Vec<i64> = (0..60).collect();
        days.reverse();
        let signals = SignalSet {
            sell: events(SignalKind::Sell, days),
            ..Default::default()
        };
        let set = AnnotationSet::build(&signals, MAX_SIGNALS);
        let oldest = set.markers_of(SignalKind::Sell).map(|m| m.timestamp).min().unwrap();
        assert_eq!(oldest, parse_timestamp(&day(10)).unwrap());
    }

    #[test]
    fn test_groups_sit_at_fixed_offsets() {
        let signals = SignalSet {
            buy: events(SignalKind::Buy, [1]),
            gold_buy: events(SignalKind::GoldBuy, [2]),
            sell: events(SignalKind::Sell, [3]),
            ..Default::default()
        };
        let set = AnnotationSet::build(&signals, MAX_SIGNALS);
        assert_eq!(set.group(SignalKind::Buy).unwrap().points[0].value, -107.0);
        assert_eq!(set.group(SignalKind::GoldBuy).unwrap().points[0].value, -107.0);
        assert_eq!(set.group(SignalKind::Sell).unwrap().points[0].value, 107.0);
        assert_eq!(set.vertical_markers.len(), 3);
        let gold = set.markers_of(SignalKind::GoldBuy).next().unwrap();
        assert_eq!(gold.label, "Gold Buy");
    }

    #[test]
    fn test_crosses_partition_is_total_and_disjoint() {
        let signals = SignalSet {
            cross: vec![
                cross(1, 40.0, true),
                cross(2, -30.0, false),
                cross(3, 55.0, true),
                cross(4, -61.0, false),
                cross(5, 12.0, false),
            ],
            ..Default::default()
        };
        let set = AnnotationSet::build(&signals, MAX_SIGNALS);
        assert_eq!(set.red_crosses.points.len(), 2);
        assert_eq!(set.green_crosses.points.len(), 3);
        assert_eq!(set.cross_count(), 5);
        assert!(set.red_crosses.points.iter().all(|p| p.value > 0.0));
        assert_eq!(set.green_crosses.points[1].value, -61.0);
        assert_eq!(set.red_crosses.polarity, Some(Polarity::Bearish));
    }

    #[test]
    fn test_crosses_are_not_capped() {
        let signals = SignalSet {
            cross: (0..80).map(|i| cross(i, 1.0, i % 2 == 0)).collect(),
            ..Default::default()
        };
        let set = AnnotationSet::build(&signals, MAX_SIGNALS);
        assert_eq!(set.cross_count(), 80);
    }

    #[test]
    fn test_bad_timestamp_skips_only_that_event() {
        let mut buy = events(SignalKind::Buy, [1, 2]);
        buy.insert(1, SignalEvent {
            kind: SignalKind::Buy,
            date: "not a date".to_string(),
        });
        let signals = SignalSet {
            buy,
            cross: vec![cross(3, 10.0, false), CrossEvent {
                date: "42".to_string(),
                value: 5.0,
                is_red: true,
            }],
            ..Default::default()
        };
        let set = AnnotationSet::build(&signals, MAX_SIGNALS);
        assert_eq!(set.markers_of(SignalKind::Buy).count(), 2);
        assert_eq!(set.cross_count(), 1);
        assert_eq!(set.skipped, 2);
    }

    #[test]
    fn test_build_is_idempotent() {
        let signals = SignalSet {
            buy: events(SignalKind::Buy, 0..10),
            sell: events(SignalKind::Sell, 5..8),
            cross: vec![cross(2, 3.0, true)],
            ..Default::default()
        };
        let first = AnnotationSet::build(&signals, MAX_SIGNALS);
        let second = AnnotationSet::build(&signals, MAX_SIGNALS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_secondary_groups_are_capped_without_lines() {
        let mut signals = SignalSet {
            buy: events(SignalKind::Buy, [1]),
            ..Default::default()
        };
        signals
            .secondary
            .insert(SignalKind::BearishDiv, events(SignalKind::BearishDiv, 0..70));
        signals
            .secondary
            .insert(SignalKind::FastMoneyBuy, events(SignalKind::FastMoneyBuy, [3, 4]));
        signals.secondary.insert(SignalKind::ZeroLineRejectSell, Vec::new());

        let set = AnnotationSet::build(&signals, MAX_SIGNALS);
        // Only the buy draws a vertical line
        assert_eq!(set.vertical_markers.len(), 1);
        assert_eq!(set.secondary_groups.len(), 3);

        let bearish = set.group(SignalKind::BearishDiv).unwrap();
        assert_eq!(bearish.points.len(), 50);
        assert_eq!(bearish.points[0].timestamp, parse_timestamp(&day(20)).unwrap());
        assert!(bearish.points.iter().all(|p| p.value == 100.0));

        let fast_money = set.group(SignalKind::FastMoneyBuy).unwrap();
        assert!(fast_money.points.iter().all(|p| p.value == -93.0));
        assert_eq!(set.secondary_of(SignalFamily::Divergence).count(), 1);
        assert_eq!(set.secondary_of(SignalFamily::Pattern).count(), 2);
    }

    #[test]
    fn test_secondary_bad_date_is_skipped() {
        let mut signals = SignalSet::default();
        signals.secondary.insert(SignalKind::MfBullishDiv, vec![
            SignalEvent {
                kind: SignalKind::MfBullishDiv,
                date: day(2),
            },
            SignalEvent {
                kind: SignalKind::MfBullishDiv,
                date: "later".to_string(),
            },
        ]);
        let set = AnnotationSet::build(&signals, MAX_SIGNALS);
        assert_eq!(set.group(SignalKind::MfBullishDiv).unwrap().points.len(), 1);
        assert_eq!(set.skipped, 1);
    }

    #[test]
    fn test_empty_signals() {
        let set = AnnotationSet::build(&SignalSet::default(), MAX_SIGNALS);
        assert!(set.vertical_markers.is_empty());
        assert_eq!(set.marker_groups.len(), 3);
        assert!(set.marker_groups.iter().all(|g| g.points.is_empty()));
        assert_eq!(set.skipped, 0);
    }

    #[test]
    fn test_most_recent_under_cap_keeps_all() {
        let points: Vec<TimePoint> = (0..3)
            .rev()
            .map(|i| TimePoint::new(parse_timestamp(&day(i)).unwrap(), i as f64))
            .collect();
        let kept = most_recent(&points, 50);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].value, 0.0);
        assert!(most_recent(&points, 0).is_empty());
    }
}
