//! Scalar formatters. Each one is total and renders [`PLACEHOLDER`] for a
//! missing value.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const PLACEHOLDER: &str = "N/A";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// A trailing `Z` is read as `+00:00`. The wall-clock time is kept in the
/// offset it was written in. Strings that do not parse are returned as-is.
pub fn format_datetime(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return PLACEHOLDER.to_string();
    };
    match parse_iso_datetime(&raw.replace('Z', "+00:00")) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::debug!(value = raw, "unparseable timestamp, rendering verbatim");
            raw.to_string()
        }
    }
}

/// Render an already-parsed timestamp.
pub fn format_timestamp(value: Option<&NaiveDateTime>) -> String {
    value.map_or_else(
        || PLACEHOLDER.to_string(),
        |dt| dt.format(DISPLAY_FORMAT).to_string(),
    )
}

/// Accepts offset and naive datetimes (`T` or space separated, optional
/// fractional seconds, optional seconds or minutes), the compact basic form
/// (`20240101T080000`) and bare dates.
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    const WITH_OFFSET: [&str; 6] = [
        "%Y-%m-%dT%H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%d %H:%M%:z",
        "%Y%m%dT%H%M%S%.f%:z",
        "%Y%m%dT%H%M%:z",
    ];
    for fmt in WITH_OFFSET {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.naive_local());
        }
    }
    const NAIVE: [&str; 6] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%Y%m%dT%H%M%S%.f",
        "%Y%m%dT%H%M",
    ];
    for fmt in NAIVE {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ndt);
        }
    }
    parse_hour_only(s).or_else(|| parse_date(s)?.and_hms_opt(0, 0, 0))
}

/// `2024-01-01T08`; chrono formats cannot leave out the minute.
fn parse_hour_only(s: &str) -> Option<NaiveDateTime> {
    let (date, hour) = s.split_once(['T', ' '])?;
    if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    parse_date(date)?.and_hms_opt(hour.parse().ok()?, 0, 0)
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y%m%d"))
        .ok()
}

/// `1h 2m 5s`, `2m 5s` or `5s`. Fractional seconds are truncated.
pub fn format_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds else {
        return PLACEHOLDER.to_string();
    };
    let hours = (seconds / 3600.0).floor() as i64;
    let minutes = (seconds.rem_euclid(3600.0) / 60.0).floor() as i64;
    let secs = seconds.rem_euclid(60.0) as i64;
    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Kilometres with two decimals from 1000 m upwards, whole metres below.
pub fn format_distance(meters: Option<f64>) -> String {
    match meters {
        None => PLACEHOLDER.to_string(),
        Some(m) if m >= 1000.0 => format!("{:.2} km", m / 1000.0),
        Some(m) => format!("{m:.0} m"),
    }
}

pub fn format_percentage(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.1}%"))
}

/// Generic fallback accessor for fields without a unit formatter.
pub fn value_or_placeholder<T: Display + ?Sized>(value: Option<&T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

/// HRV score from raw RMSSD (ms): `round(ln(rmssd) * 20)`.
///
/// Shared with the other Tempo clients, so the formula and the
/// round-half-to-even rule must not change. Non-positive input has no score.
pub fn hrv_score(rmssd: Option<f64>) -> Option<i64> {
    let rmssd = rmssd.filter(|v| *v > 0.0)?;
    Some((rmssd.ln() * 20.0).round_ties_even() as i64)
}
