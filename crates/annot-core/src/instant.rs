//! Sentinel instants and lenient ISO-8601 parsing.
//!
//! Open-ended or unparseable interval bounds are replaced by fixed far-past /
//! far-future sentinels rather than raised as errors. The defaults sit inside
//! the range the downstream time-series store can represent (InfluxDB chokes
//! on extreme dates, so no `i64::MIN`-style bounds here).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

/// The pair of sentinel instants substituted for missing interval bounds.
///
/// Configurable per invocation; the defaults are `1800-02-02T00:00:00Z` and
/// `2200-02-02T00:00:00Z`, far outside any realistic sensor timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinels {
    /// Substitute for a missing or unparseable `begins_at`.
    pub min: DateTime<Utc>,
    /// Substitute for a missing or unparseable `ends_before`.
    pub max: DateTime<Utc>,
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            min: Utc.with_ymd_and_hms(1800, 2, 2, 0, 0, 0).unwrap(),
            max: Utc.with_ymd_and_hms(2200, 2, 2, 0, 0, 0).unwrap(),
        }
    }
}

/// Parse an optional ISO-8601 timestamp, falling back to a sentinel.
///
/// Accepted forms, tried in order:
/// - RFC 3339 with an offset (`2018-05-09T17:10:00.000Z`)
/// - naive datetime, assumed UTC (`2018-05-09T17:10:00`)
/// - bare date, assumed midnight UTC (`2018-05-09`)
///
/// `None`, empty strings, and anything unparseable all yield `fallback`.
/// This is deliberate: malformed timestamps are a data-quality issue, not a
/// contract violation.
pub fn parse_instant_or(value: Option<&str>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    let Some(raw) = value else {
        return fallback;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return fallback;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return naive.and_utc();
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return date.and_time(NaiveTime::MIN).and_utc();
    }
    fallback
}

/// Format an instant in the store's canonical form: UTC, millisecond
/// precision, `Z` suffix (`2018-05-09T17:10:00.000Z`).
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
