use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    /// Daily bars as sent by the analytics service.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    /// Intraday bars as sent by the analytics service.
    pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
    /// Axis ticks of intraday charts.
    pub const INTRADAY_AXIS_FORMAT: &str = "%m-%d %H:%M";
}

/// Parses one timestamp string from the service.
/// Accepts plain dates, `date time`, and RFC 3339. Naive values are taken as UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, TimeUtils::DATE_TIME_FORMAT) {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, TimeUtils::DATE_FORMAT) {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Plot x-coordinate (seconds since epoch) for a timestamp.
pub fn to_plot_x(timestamp: &DateTime<Utc>) -> f64 {
    timestamp.timestamp_millis() as f64 / TimeUtils::MS_IN_S as f64
}

/// Inverse of `to_plot_x`, used by axis formatters.
pub fn from_plot_x(x: f64) -> Option<DateTime<Utc>> {
    if !x.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((x * TimeUtils::MS_IN_S as f64).round() as i64)
}

/// True when any bar carries a time of day other than midnight.
pub fn is_intraday(dates: &[DateTime<Utc>]) -> bool {
    dates.iter().any(|dt| dt.num_seconds_from_midnight() != 0)
}

/// Axis label for a plot x-coordinate. Intraday charts show the time of day.
pub fn format_plot_x(x: f64, intraday: bool) -> String {
    let format = if intraday {
        TimeUtils::INTRADAY_AXIS_FORMAT
    } else {
        TimeUtils::STANDARD_TIME_FORMAT
    };
    from_plot_x(x)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_daily_and_intraday() {
        let daily = parse_timestamp("2024-03-05").unwrap();
        assert_eq!((daily.year(), daily.month(), daily.day()), (2024, 3, 5));
        assert_eq!(daily.hour(), 0);

        let intraday = parse_timestamp("2024-03-05 14:30:00").unwrap();
        assert_eq!((intraday.hour(), intraday.minute()), (14, 30));

        let rfc = parse_timestamp("2024-03-05T14:30:00+02:00").unwrap();
        assert_eq!(rfc.hour(), 12);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-45").is_none());
    }

    #[test]
    fn test_plot_x_round_trip_keeps_date() {
        let ts = parse_timestamp("2023-11-20").unwrap();
        assert_eq!(format_plot_x(to_plot_x(&ts), false), "2023-11-20");
        assert_eq!(format_plot_x(f64::NAN, false), "");
    }

    #[test]
    fn test_intraday_axis_shows_time_of_day() {
        let bar = parse_timestamp("2024-03-05 14:30:00").unwrap();
        assert_eq!(format_plot_x(to_plot_x(&bar), true), "03-05 14:30");

        let daily = [parse_timestamp("2024-03-05").unwrap(), parse_timestamp("2024-03-06").unwrap()];
        assert!(!is_intraday(&daily));
        assert!(is_intraday(&[daily[0], bar]));
        assert!(!is_intraday(&[]));
    }
}
