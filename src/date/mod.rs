//! Date module: conversion of the accepted date inputs into a UTC instant.
//!
//! Strings follow ISO 8601 / RFC 3339. Strings without an offset are read as UTC,
//! and a bare date is UTC midnight. Numbers are milliseconds since the Unix epoch.

use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::RelativeTimeError;

/// Date-times with an offset that RFC 3339 rejects: seconds omitted, or a space
/// instead of `T`. `%#z` takes `Z`, `+02:00`, `+0200` and `+02`.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const NAIVE_MINUTE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Anything that can be turned into an absolute instant.
pub trait IntoInstant {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError>;
}

impl IntoInstant for &str {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        parse_date(self)
    }
}

impl IntoInstant for &String {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        parse_date(self)
    }
}

impl IntoInstant for String {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        parse_date(&self)
    }
}

/// Milliseconds since the Unix epoch.
impl IntoInstant for i64 {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        DateTime::from_timestamp_millis(self).ok_or_else(|| {
            RelativeTimeError::InvalidDate(format!("{self} ms is outside the representable range"))
        })
    }
}

/// Milliseconds since the Unix epoch; the fractional part is truncated toward zero.
impl IntoInstant for f64 {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        if !self.is_finite() {
            return Err(RelativeTimeError::InvalidDate(format!("{self} is not a finite timestamp")));
        }
        let millis = self.trunc();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return Err(RelativeTimeError::InvalidDate(format!(
                "{self} ms is outside the representable range"
            )));
        }
        (millis as i64).into_instant()
    }
}

impl<Tz: TimeZone> IntoInstant for DateTime<Tz> {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        Ok(self.with_timezone(&Utc))
    }
}

impl<Tz: TimeZone> IntoInstant for &DateTime<Tz> {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        Ok(self.with_timezone(&Utc))
    }
}

/// Interpreted as UTC.
impl IntoInstant for NaiveDateTime {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        Ok(self.and_utc())
    }
}

/// UTC midnight of the given day.
impl IntoInstant for NaiveDate {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        Ok(self.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl IntoInstant for SystemTime {
    fn into_instant(self) -> Result<DateTime<Utc>, RelativeTimeError> {
        Ok(DateTime::<Utc>::from(self))
    }
}

/// Parse a date string into a UTC instant.
///
/// Tries, in order: RFC 3339 with offset, the other date-times with an offset
/// (seconds optional), date-time without offset (`T` or space separated,
/// seconds optional), then a bare `YYYY-MM-DD` date. The `T` and `Z`
/// designators are case-insensitive.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, RelativeTimeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(RelativeTimeError::InvalidDate("empty date string".to_string()));
    }
    let normalized = s.to_ascii_uppercase();
    let n = normalized.as_str();

    if let Ok(dt) = DateTime::parse_from_rfc3339(n) {
        tracing::trace!(input = s, "parsed as RFC 3339");
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(n, fmt) {
            tracing::trace!(input = s, format = fmt, "parsed as date-time with offset");
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS.iter().chain(NAIVE_MINUTE_FORMATS.iter()) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(n, fmt) {
            tracing::trace!(input = s, format = *fmt, "parsed as naive UTC date-time");
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(n, "%Y-%m-%d") {
        tracing::trace!(input = s, "parsed as bare date");
        return date.into_instant();
    }

    Err(RelativeTimeError::InvalidDate(format!("'{s}' is not a recognised date")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_parse_rfc3339_utc() {
        let dt = parse_date("2024-01-10T12:00:00Z").unwrap();
        assert_eq!(dt.timestamp_millis(), 1_704_888_000_000);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_date("2024-01-10T14:00:00+02:00").unwrap();
        assert_eq!(dt, utc("2024-01-10T12:00:00Z"));
    }

    #[test]
    fn test_parse_offset_without_seconds() {
        let expected = utc("2024-01-10T10:00:00Z");
        assert_eq!(parse_date("2024-01-10T10:00Z").unwrap(), expected);
        assert_eq!(parse_date("2024-01-10T12:00+02:00").unwrap(), expected);
        assert_eq!(parse_date("2024-01-10 12:00+02:00").unwrap(), expected);
        assert_eq!(parse_date("2024-01-10T05:00-0500").unwrap(), expected);
    }

    #[test]
    fn test_parse_lowercase_designators() {
        let expected = utc("2024-01-10T10:00:00Z");
        assert_eq!(parse_date("2024-01-10T10:00:00z").unwrap(), expected);
        assert_eq!(parse_date("2024-01-10t10:00:00Z").unwrap(), expected);
        assert_eq!(parse_date("2024-01-10T10:00z").unwrap(), expected);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = parse_date("2024-01-10T11:59:58.250Z").unwrap();
        assert_eq!(dt.timestamp_millis() % 1_000, 250);
    }

    #[test]
    fn test_parse_naive_as_utc() {
        assert_eq!(parse_date("2024-01-10T10:00:00").unwrap(), utc("2024-01-10T10:00:00Z"));
        assert_eq!(parse_date("2024-01-10 10:00:00").unwrap(), utc("2024-01-10T10:00:00Z"));
        assert_eq!(parse_date("2024-01-10T10:00").unwrap(), utc("2024-01-10T10:00:00Z"));
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        assert_eq!(parse_date("2024-01-10").unwrap(), utc("2024-01-10T00:00:00Z"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_date("  2024-01-10T10:00:00Z\n").unwrap(), utc("2024-01-10T10:00:00Z"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "   ", "yesterday", "2024-13-40", "2024-01-10T25:00:00Z", "12/01/2024"] {
            let err = parse_date(bad).unwrap_err();
            assert!(
                matches!(err, RelativeTimeError::InvalidDate(_)),
                "expected InvalidDate for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_epoch_millis() {
        let dt = 1_704_888_000_000_i64.into_instant().unwrap();
        assert_eq!(dt, utc("2024-01-10T12:00:00Z"));
        assert_eq!(0_i64.into_instant().unwrap(), utc("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn test_epoch_millis_out_of_range() {
        assert!(matches!(i64::MAX.into_instant(), Err(RelativeTimeError::InvalidDate(_))));
    }

    #[test]
    fn test_float_millis() {
        assert_eq!(1_704_888_000_000.9_f64.into_instant().unwrap(), utc("2024-01-10T12:00:00Z"));
        assert!(matches!(f64::NAN.into_instant(), Err(RelativeTimeError::InvalidDate(_))));
        assert!(matches!(f64::INFINITY.into_instant(), Err(RelativeTimeError::InvalidDate(_))));
        assert!(matches!(1e300_f64.into_instant(), Err(RelativeTimeError::InvalidDate(_))));
    }

    #[test]
    fn test_structured_values() {
        let offset = FixedOffset::east_opt(3_600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 1, 10, 13, 0, 0).unwrap();
        assert_eq!(local.into_instant().unwrap(), utc("2024-01-10T12:00:00Z"));

        let naive = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(naive.into_instant().unwrap(), utc("2024-01-10T00:00:00Z"));

        let system = SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_704_888_000);
        assert_eq!(system.into_instant().unwrap(), utc("2024-01-10T12:00:00Z"));
    }
}
