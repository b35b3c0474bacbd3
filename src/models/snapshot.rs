use serde::{Deserialize, Serialize};

use crate::domain::SignalSet;
use crate::models::series_set::SeriesSet;
use crate::models::summary::Summary;

/// Labels carried through for chart titles.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ChartMeta {
    pub ticker: Option<String>,
    pub company_name: Option<String>,
    pub interval: Option<String>,
    pub period: Option<String>,
}

impl ChartMeta {
    pub fn title(&self) -> String {
        let ticker = self.ticker.as_deref().unwrap_or("?");
        match (&self.company_name, &self.interval) {
            (Some(name), Some(interval)) if name != ticker => {
                format!("{} ({}) · {}", name, ticker, interval)
            }
            (_, Some(interval)) => format!("{} · {}", ticker, interval),
            _ => ticker.to_string(),
        }
    }
}

/// Signal lists of the trend-exhaust oscillator. An absent list counts as empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExhaustionSignals {
    pub overbought: Option<Vec<String>>,
    pub oversold: Option<Vec<String>>,
    pub ob_reversal: Option<Vec<String>>,
    pub os_reversal: Option<Vec<String>>,
    pub bull_cross: Option<Vec<String>>,
    pub bear_cross: Option<Vec<String>>,
}

/// The `{avgPercentR, signals}` record consumed by the exhaustion scorer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TrendExhaust {
    pub short_percent_r: Vec<f64>,
    pub long_percent_r: Vec<f64>,
    /// Percentile oscillator, roughly -100..0; gaps are the sentinel
    pub avg_percent_r: Vec<f64>,
    pub signals: ExhaustionSignals,
}

/// One normalized fetch. Immutable for the lifetime of a chart refresh.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnalyzerSnapshot {
    pub meta: ChartMeta,
    pub series: SeriesSet,
    pub signals: SignalSet,
    pub summary: Summary,
    pub trend_exhaust: Option<TrendExhaust>,
}
