//! One refresh: raw JSON text -> normalized snapshot -> chart bundle.

use anyhow::Context;

use crate::chart::ChartBundle;
use crate::data::{RawAnalyzerResponse, SnapshotSource, fetch_first_available, normalize};
use crate::error::Result;

/// Pure and synchronous. A failure leaves nothing half-built for the caller.
pub fn refresh(text: &str) -> Result<ChartBundle> {
    let raw = RawAnalyzerResponse::from_json_str(text)?;
    let snapshot = normalize(&raw)?;
    Ok(ChartBundle::build(&snapshot))
}

pub fn refresh_from(source: &dyn SnapshotSource) -> anyhow::Result<ChartBundle> {
    let text = source.fetch()?;
    refresh(&text).with_context(|| format!("Rejected response from {}", source.signature()))
}

/// Uses the first source that answers. Returns the bundle with the source's signature.
pub fn refresh_first_available(
    sources: &[Box<dyn SnapshotSource>],
) -> anyhow::Result<(ChartBundle, String)> {
    let (text, signature) = fetch_first_available(sources)?;
    let bundle =
        refresh(&text).with_context(|| format!("Rejected response from {}", signature))?;
    Ok((bundle, signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::exhaustion::ExhaustionLevel;
    use crate::data::InlineSource;
    use crate::domain::SignalKind;
    use crate::error::PipelineError;

    const SAMPLE: &str = include_str!("../demos/sample_response.json");

    #[test]
    fn test_sample_response_end_to_end() {
        let bundle = refresh(SAMPLE).unwrap();
        assert_eq!(bundle.point_count, 12);
        assert_eq!(bundle.title, "Apple Inc. (AAPL) · 1d");
        assert_eq!(bundle.price.len(), 12);
        assert_eq!(bundle.stoch.len(), 11);
        assert!(!bundle.price[4].is_renderable());
        assert_eq!(bundle.summary.wt1, "-48.21");
        assert_eq!(bundle.summary.money_flow, "-3.46");
        assert_eq!(bundle.summary.status, "Potential buy zone");
        assert_eq!(bundle.annotations.markers_of(SignalKind::Buy).count(), 2);
        assert_eq!(bundle.annotations.markers_of(SignalKind::GoldBuy).count(), 1);
        assert_eq!(bundle.annotations.markers_of(SignalKind::Sell).count(), 1);
        assert_eq!(bundle.annotations.red_crosses.points.len(), 1);
        assert_eq!(bundle.annotations.green_crosses.points.len(), 2);
        let annotations = &bundle.annotations;
        assert_eq!(annotations.secondary_groups.len(), 12);
        assert_eq!(annotations.group(SignalKind::MfBullishDiv).unwrap().points.len(), 2);
        assert_eq!(annotations.group(SignalKind::ZeroLineRejectSell).unwrap().points[0].value, 93.0);
        assert_eq!(bundle.short_percent_r.len(), 12);
        assert_eq!(bundle.long_percent_r[11].value, -88.0);
        assert!(!bundle.intraday);
        // One buy date is garbage
        assert_eq!(bundle.annotations.skipped, 1);
        assert!(bundle.has_trend_exhaust());
        assert_eq!(bundle.exhaustion.level, ExhaustionLevel::Critical);
        assert_eq!(bundle.exhaustion.signal_count, 3);
    }

    #[test]
    fn test_refresh_is_repeatable() {
        let first = refresh(SAMPLE).unwrap();
        let second = refresh(SAMPLE).unwrap();
        // Gap points are NaN, so compare the serialized form
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_malformed_series_rejects_refresh() {
        let err = refresh(r#"{ "dates": ["2024-01-01"], "wt1": 5 }"#).unwrap_err();
        match err {
            PipelineError::MalformedInput { field, .. } => assert_eq!(field, "wt1"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_refresh_from_sources() {
        let bundle = refresh_from(&InlineSource::new("sample", SAMPLE)).unwrap();
        assert_eq!(bundle.point_count, 12);

        let bad = InlineSource::new("bad", "[]");
        let err = refresh_from(&bad).unwrap_err();
        assert!(format!("{:#}", err).contains("inline:bad"));

        let sources: Vec<Box<dyn SnapshotSource>> = vec![
            Box::new(crate::data::JsonFileSource::new("/no/such/file.json")),
            Box::new(InlineSource::new("sample", SAMPLE)),
        ];
        let (bundle, signature) = refresh_first_available(&sources).unwrap();
        assert_eq!(signature, "inline:sample");
        assert!(!bundle.is_empty());
    }
}
