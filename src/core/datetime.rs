//! Parsing of ISO-8601 observation times.
//!
//! Date-times carrying an offset keep it; local date-times without an offset
//! are interpreted at UTC.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%MZ"];
const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// The zero (UTC) offset.
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Parse a date-time with an explicit offset, e.g. `2015-09-29T02:22:35-13:30`.
pub fn parse_offset_date_time(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    OFFSET_FORMATS.iter().find_map(|fmt| {
        if fmt.ends_with('Z') {
            NaiveDateTime::parse_from_str(s, fmt)
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        } else {
            DateTime::parse_from_str(s, fmt).ok()
        }
    })
}

/// Parse a local date-time without offset, e.g. `2016-12-31T02:22:35`.
pub fn parse_local_date_time(s: &str) -> Option<NaiveDateTime> {
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse an observation time, assuming UTC when no offset is present.
pub fn parse_date_time(s: &str) -> Result<DateTime<FixedOffset>> {
    let s = s.trim();
    parse_offset_date_time(s)
        .or_else(|| parse_local_date_time(s).map(|naive| naive.and_utc().fixed_offset()))
        .ok_or_else(|| ForecastError::TimestampError(format!("cannot parse date-time '{}'", s)))
}

pub fn is_offset_date_time(s: &str) -> bool {
    parse_offset_date_time(s.trim()).is_some()
}

pub fn is_local_date_time(s: &str) -> bool {
    parse_local_date_time(s.trim()).is_some()
}
