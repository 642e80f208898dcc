//! Parsing of the date strings returned by the counts API

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

/// Formats for strings that carry no offset. They are read as local
/// wall-clock time, the same way the browser's `Date` constructor does.
const NAIVE_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-only ISO strings; the browser reads these as UTC midnight
const UTC_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-only US strings; read as local midnight
const LOCAL_DATE_FORMAT: &str = "%m/%d/%Y";

/// A parsed chart label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock time with no offset; the chart interprets it in the
    /// viewer's time zone
    Local(NaiveDateTime),
    /// Time with an explicit offset
    Zoned(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Wall-clock time as written in the source string
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            Timestamp::Local(t) => *t,
            Timestamp::Zoned(t) => t.naive_local(),
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timestamp::Local(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S%.3f")),
            Timestamp::Zoned(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

// Chart.js (moment) parses ISO strings itself, keeping offset-less ones local.
impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse one date string from the counts payload.
///
/// Returns `None` for strings no known format matches; the caller keeps
/// the slot so labels stay aligned with the count arrays.
pub fn parse_timestamp(input: &str) -> Option<Timestamp> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Some(Timestamp::Zoned(t));
    }
    if let Ok(t) = DateTime::parse_from_rfc2822(input) {
        return Some(Timestamp::Zoned(t));
    }

    if let Some(t) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(Timestamp::Local(t));
    }

    if let Ok(d) = NaiveDate::parse_from_str(input, UTC_DATE_FORMAT) {
        let midnight = d.and_time(NaiveTime::MIN).and_utc();
        return Some(Timestamp::Zoned(midnight.fixed_offset()));
    }

    NaiveDate::parse_from_str(input, LOCAL_DATE_FORMAT)
        .ok()
        .map(|d| Timestamp::Local(d.and_time(NaiveTime::MIN)))
}
