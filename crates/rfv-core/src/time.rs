//! Timestamp encoding.
//!
//! Timestamps are stored as RFC 3339 strings in UTC with microsecond
//! precision and a `Z` suffix. The fixed width means string order equals
//! chronological order, which the store relies on for `ORDER BY`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Encode a UTC instant in the canonical form.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time in the canonical form.
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Parse a client-supplied timestamp.
///
/// Accepts RFC 3339 with any offset, a naive date-time (taken as UTC), or a
/// bare date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
