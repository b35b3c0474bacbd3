use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Indicator: the named series delivered with every fetch
// ============================================================================

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
pub enum Indicator {
    #[strum(to_string = "Price")]
    Price,
    #[strum(to_string = "High")]
    High,
    #[strum(to_string = "Low")]
    Low,
    #[strum(to_string = "Open")]
    Open,
    #[strum(to_string = "WT1")]
    Wt1,
    #[strum(to_string = "WT2")]
    Wt2,
    #[strum(to_string = "VWAP")]
    WtVwap,
    #[strum(to_string = "RSI")]
    Rsi,
    #[strum(to_string = "Stoch RSI")]
    Stoch,
    #[strum(to_string = "Money Flow")]
    MoneyFlow,
}

impl Indicator {
    /// Field name in the analyzer response.
    pub fn key(&self) -> &'static str {
        match self {
            Indicator::Price => "price",
            Indicator::High => "high",
            Indicator::Low => "low",
            Indicator::Open => "open",
            Indicator::Wt1 => "wt1",
            Indicator::Wt2 => "wt2",
            Indicator::WtVwap => "wtVwap",
            Indicator::Rsi => "rsi",
            Indicator::Stoch => "stoch",
            Indicator::MoneyFlow => "moneyFlow",
        }
    }
}

// ============================================================================
// SeriesSet: index-aligned series sharing one date axis
// ============================================================================

/// Every series has the same length as `dates`; a gap is the sentinel, never a removal.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SeriesSet {
    dates: Vec<DateTime<Utc>>,
    series: HashMap<Indicator, Vec<f64>>,
}

impl SeriesSet {
    /// Callers (the normalizer) guarantee every series has `dates.len()` samples.
    pub fn new(dates: Vec<DateTime<Utc>>, series: HashMap<Indicator, Vec<f64>>) -> Self {
        debug_assert!(series.values().all(|s| s.len() == dates.len()));
        Self { dates, series }
    }

    pub fn dates(&self) -> &[DateTime<Utc>] {
        &self.dates
    }

    /// Samples for `indicator`; empty if the set was built without it.
    pub fn get(&self, indicator: Indicator) -> &[f64] {
        self.series
            .get(&indicator)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
