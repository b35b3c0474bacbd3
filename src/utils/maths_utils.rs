use itertools::{Itertools, MinMaxResult};

/// The gap marker used in place of missing samples.
pub const SENTINEL: f64 = f64::NAN;

/// True for the gap marker (and any other non-finite value that slipped through).
/// All comparisons in the transformer and scorer go through this guard first.
#[inline]
pub fn is_sentinel(value: f64) -> bool {
    !value.is_finite()
}

/// Converts a sample to `Some(value)` unless it's the sentinel.
#[inline]
pub fn valid(value: f64) -> Option<f64> {
    if is_sentinel(value) { None } else { Some(value) }
}

pub fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Min and max over the renderable samples, skipping sentinels.
/// Returns `None` when nothing is renderable.
pub fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
    match values
        .iter()
        .copied()
        .filter(|v| !is_sentinel(*v))
        .minmax_by(|a, b| a.total_cmp(b))
    {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

/// Most recent renderable sample in `values`.
pub fn last_valid(values: &[f64]) -> Option<f64> {
    values.iter().rev().copied().find_map(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_guards() {
        assert!(is_sentinel(SENTINEL));
        assert!(is_sentinel(f64::INFINITY));
        assert!(!is_sentinel(0.0));
        assert_eq!(valid(-3.5), Some(-3.5));
        assert_eq!(valid(f64::NAN), None);
    }

    #[test]
    fn test_finite_min_max_skips_gaps() {
        assert_eq!(finite_min_max(&[f64::NAN, 3.0, -1.0, f64::NAN, 7.0]), Some((-1.0, 7.0)));
        assert_eq!(finite_min_max(&[f64::NAN, 2.0]), Some((2.0, 2.0)));
        assert_eq!(finite_min_max(&[f64::NAN]), None);
        assert_eq!(finite_min_max(&[]), None);
    }

    #[test]
    fn test_last_valid() {
        assert_eq!(last_valid(&[1.0, 2.0, f64::NAN]), Some(2.0));
        assert_eq!(last_valid(&[f64::NAN, f64::NAN]), None);
    }
}
