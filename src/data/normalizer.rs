//! Series normalizer: untrusted analyzer response -> `AnalyzerSnapshot`.
//!
//! Missing or invalid samples become the sentinel in place (alignment with
//! `dates` is kept), missing summary values become 0. The only failure is a
//! field with the wrong shape.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use strum::IntoEnumIterator;

use crate::analysis::zone_status::classify_zone;
use crate::config::DEBUG_FLAGS;
use crate::data::response::{NULL, RawAnalyzerResponse, json_type_name};
use crate::domain::{CrossEvent, SignalEvent, SignalKind, SignalSet};
use crate::error::{PipelineError, Result};
use crate::models::{
    AnalyzerSnapshot, ChartMeta, ExhaustionSignals, Indicator, SeriesSet, Summary, TrendExhaust,
};
use crate::utils::SENTINEL;
use crate::utils::time_utils::parse_timestamp;

pub fn normalize(raw: &RawAnalyzerResponse) -> Result<AnalyzerSnapshot> {
    let dates = normalize_dates(raw.field("dates"))?;
    let n = dates.len();

    // Series are independent of each other
    let indicators: Vec<Indicator> = Indicator::iter().collect();
    let series = indicators
        .into_par_iter()
        .map(|indicator| {
            normalize_aligned_series(raw.field(indicator.key()), indicator.key(), n)
                .map(|samples| (indicator, samples))
        })
        .collect::<Result<HashMap<Indicator, Vec<f64>>>>()?;

    if DEBUG_FLAGS.print_normalizer_gaps {
        for indicator in Indicator::iter() {
            let gaps = series[&indicator].iter().filter(|v| v.is_nan()).count();
            log::debug!("{}: {} of {} samples are gaps", indicator, gaps, n);
        }
    }

    let mut signals = normalize_signals(raw.field("signals"))?;
    signals.secondary = normalize_secondary_signals(raw)?;
    let summary = normalize_summary(raw.field("summary"), raw.field("status"))?;
    let trend_exhaust = normalize_trend_exhaust(raw.field("trendExhaust"), n)?;

    Ok(AnalyzerSnapshot {
        meta: normalize_meta(raw),
        series: SeriesSet::new(dates, series),
        signals,
        summary,
        trend_exhaust,
    })
}

// ============================================================================
// Samples and series
// ============================================================================

/// One sample: finite JSON numbers pass, everything else is the sentinel.
pub fn normalize_sample(value: &Value) -> f64 {
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .unwrap_or(SENTINEL)
}

/// Cleans every sample in place. Never drops an entry.
pub fn normalize_samples(items: &[Value]) -> Vec<f64> {
    items.iter().map(normalize_sample).collect()
}

/// A plotted series sharing the date axis.
/// Absent -> `n` sentinels. Present with another length -> caller error.
pub fn normalize_aligned_series(value: &Value, field: &str, n: usize) -> Result<Vec<f64>> {
    match value {
        Value::Null => Ok(vec![SENTINEL; n]),
        Value::Array(items) if items.len() == n => Ok(normalize_samples(items)),
        Value::Array(items) => Err(PipelineError::malformed(
            field,
            format!("expected {} samples to match `dates`, got {}", n, items.len()),
        )),
        other => Err(expect_array(field, other)),
    }
}

// Optional series (trend exhaust): absent or `[]` mean "not computed".
fn normalize_optional_series(value: &Value, field: &str, n: usize) -> Result<Vec<f64>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) if items.is_empty() => Ok(Vec::new()),
        _ => normalize_aligned_series(value, field, n),
    }
}

/// The shared date axis. Every entry must parse, since it defines alignment for every series.
pub fn normalize_dates(value: &Value) -> Result<Vec<DateTime<Utc>>> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(expect_array("dates", other)),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().and_then(parse_timestamp).ok_or_else(|| {
                PipelineError::malformed(format!("dates[{}]", i), format!("unparseable date {}", item))
            })
        })
        .collect()
}

// ============================================================================
// Signals
// ============================================================================

pub fn normalize_signals(value: &Value) -> Result<SignalSet> {
    let fields = match value {
        Value::Null => return Ok(SignalSet::default()),
        Value::Object(fields) => fields,
        other => return Err(expect_object("signals", other)),
    };

    Ok(SignalSet {
        buy: normalize_event_list(fields, SignalKind::Buy)?,
        gold_buy: normalize_event_list(fields, SignalKind::GoldBuy)?,
        sell: normalize_event_list(fields, SignalKind::Sell)?,
        cross: normalize_cross_list(fields.get("cross").unwrap_or(&NULL))?,
        secondary: BTreeMap::new(),
    })
}

/// The `divergences` and `patterns` objects. Only lists actually present get an entry.
pub fn normalize_secondary_signals(
    raw: &RawAnalyzerResponse,
) -> Result<BTreeMap<SignalKind, Vec<SignalEvent>>> {
    let mut secondary = BTreeMap::new();
    for (family, kinds) in [
        ("divergences", &SignalKind::DIVERGENCES),
        ("patterns", &SignalKind::PATTERNS),
    ] {
        let fields = match raw.field(family) {
            Value::Null => continue,
            Value::Object(fields) => fields,
            other => return Err(expect_object(family, other)),
        };
        for &kind in kinds {
            let field = format!("{}.{}", family, kind.key());
            if let Some(dates) = normalize_date_list(fields.get(kind.key()), &field)? {
                let events = dates
                    .into_iter()
                    .map(|date| SignalEvent { kind, date })
                    .collect();
                secondary.insert(kind, events);
            }
        }
    }
    Ok(secondary)
}

fn normalize_event_list(fields: &Map<String, Value>, kind: SignalKind) -> Result<Vec<SignalEvent>> {
    let name = kind.key();
    let dates = normalize_date_list(fields.get(name), &format!("signals.{}", name))?;
    Ok(dates
        .unwrap_or_default()
        .into_iter()
        .map(|date| SignalEvent { kind, date })
        .collect())
}

// Entries that aren't strings are kept as their JSON text; the annotation layer
// fails to parse them and skips them individually.
fn normalize_date_list(value: Option<&Value>, field: &str) -> Result<Option<Vec<String>>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.iter().map(event_date_text).collect())),
        Some(other) => Err(expect_array(field, other)),
    }
}

fn normalize_cross_list(value: &Value) -> Result<Vec<CrossEvent>> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => return Err(expect_array("signals.cross", other)),
    };

    Ok(items
        .iter()
        .map(|item| CrossEvent {
            date: item.get("date").map(event_date_text).unwrap_or_default(),
            value: item.get("value").map(normalize_sample).unwrap_or(SENTINEL),
            is_red: item.get("isRed").and_then(Value::as_bool).unwrap_or(false),
        })
        .collect())
}

fn event_date_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Summary
// ============================================================================

pub fn normalize_summary(value: &Value, status: &Value) -> Result<Summary> {
    let empty = Map::new();
    let fields = match value {
        Value::Null => &empty,
        Value::Object(fields) => fields,
        other => return Err(expect_object("summary", other)),
    };

    let scalar = |name: &str| fields.get(name).map(normalize_sample).map_or(0.0, zero_if_gap);
    let count = |name: &str| fields.get(name).map_or(0, normalize_count);

    let current_wt1 = scalar("currentWT1");
    let current_wt2 = scalar("currentWT2");

    let status = match status {
        Value::String(text) if !text.trim().is_empty() => text.clone(),
        _ => classify_zone(current_wt1, current_wt2).to_string(),
    };

    Ok(Summary {
        current_wt1,
        current_wt2,
        current_mf: scalar("currentMF"),
        current_price: scalar("currentPrice"),
        price_change_pct: scalar("priceChangePct"),
        buy_signals: count("buySignals"),
        gold_buy_signals: count("goldBuySignals"),
        sell_signals: count("sellSignals"),
        last_update: fields
            .get("lastUpdate")
            .and_then(Value::as_str)
            .map(str::to_string),
        status,
    })
}

fn zero_if_gap(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn normalize_count(value: &Value) -> u32 {
    if let Some(count) = value.as_u64() {
        return u32::try_from(count).unwrap_or(u32::MAX);
    }
    match value.as_f64() {
        Some(count) if count.is_finite() && count > 0.0 => count.floor().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

// ============================================================================
// Trend exhaust + metadata
// ============================================================================

pub fn normalize_trend_exhaust(value: &Value, n: usize) -> Result<Option<TrendExhaust>> {
    let fields = match value {
        Value::Null => return Ok(None),
        Value::Object(fields) => fields,
        other => return Err(expect_object("trendExhaust", other)),
    };
    let field = |name: &str| fields.get(name).unwrap_or(&NULL);

    let signals = match field("signals") {
        Value::Null => ExhaustionSignals::default(),
        Value::Object(signal_fields) => {
            let list = |name: &str| {
                normalize_date_list(
                    signal_fields.get(name),
                    &format!("trendExhaust.signals.{}", name),
                )
            };
            ExhaustionSignals {
                overbought: list("overbought")?,
                oversold: list("oversold")?,
                ob_reversal: list("obReversal")?,
                os_reversal: list("osReversal")?,
                bull_cross: list("bullCross")?,
                bear_cross: list("bearCross")?,
            }
        }
        other => return Err(expect_object("trendExhaust.signals", other)),
    };

    Ok(Some(TrendExhaust {
        short_percent_r: normalize_optional_series(
            field("shortPercentR"),
            "trendExhaust.shortPercentR",
            n,
        )?,
        long_percent_r: normalize_optional_series(
            field("longPercentR"),
            "trendExhaust.longPercentR",
            n,
        )?,
        avg_percent_r: normalize_optional_series(
            field("avgPercentR"),
            "trendExhaust.avgPercentR",
            n,
        )?,
        signals,
    }))
}

fn normalize_meta(raw: &RawAnalyzerResponse) -> ChartMeta {
    let text = |name: &str| raw.field(name).as_str().map(str::to_string);
    ChartMeta {
        ticker: text("ticker"),
        company_name: text("companyName"),
        interval: text("interval"),
        period: text("period"),
    }
}

fn expect_array(field: &str, found: &Value) -> PipelineError {
    PipelineError::malformed(field, format!("expected an array, got {}", json_type_name(found)))
}

fn expect_object(field: &str, found: &Value) -> PipelineError {
    PipelineError::malformed(field, format!("expected an object, got {}", json_type_name(found)))
}
