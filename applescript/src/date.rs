//! Date conversion between ISO-8601 callers and AppleScript
//!
//! The two directions are deliberately asymmetric:
//!
//! - **Formatting** ([`format_date_literal`]) is one-way and normalizing:
//!   any parseable ISO-8601 input is rendered as the `M/D/YYYY H:MM:00
//!   AM/PM` literal AppleScript's `date "…"` coercion accepts. Input that
//!   does not parse passes through verbatim, so callers holding an
//!   already-native date string are not rejected.
//! - **Parsing** ([`parse_date`]) is best-effort: AppleScript stringifies
//!   dates in a locale-dependent format with no contract, so a handful of
//!   known shapes are tried and anything else is preserved as
//!   [`AppleDate::Raw`] rather than discarded.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// The token AppleScript returns for an absent property value.
pub const MISSING_VALUE: &str = "missing value";

/// A due date as reported by AppleScript.
///
/// AppleScript date strings carry no timezone, so normalized values are
/// wall-clock timestamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppleDate {
    /// The native string parsed into a timestamp.
    Timestamp(NaiveDateTime),
    /// The native string could not be normalized; preserved verbatim.
    Raw(String),
}

impl Serialize for AppleDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Timestamp(dt) => {
                serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
            Self::Raw(text) => serializer.serialize_str(text),
        }
    }
}

impl std::fmt::Display for AppleDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timestamp(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Raw(text) => write!(f, "{text}"),
        }
    }
}

/// Render a timestamp as an AppleScript date literal.
///
/// Accepts RFC 3339 and the common offset-less ISO-8601 shapes; a bare
/// date gets midnight. Output is `M/D/YYYY H:MM:00 AM/PM` (12-hour clock,
/// hour 0 rendered as 12, seconds zeroed — AppleScript does not guarantee
/// second precision on the way back out anyway).
///
/// Unparseable input is returned unchanged so native-formatted date
/// strings can be passed straight through to `date "…"`.
#[must_use]
pub fn format_date_literal(input: &str) -> String {
    let Some(dt) = parse_iso(input.trim()) else {
        return input.to_string();
    };
    let (is_pm, hour) = dt.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!(
        "{}/{}/{} {}:{:02}:00 {}",
        dt.month(),
        dt.day(),
        dt.year(),
        hour,
        dt.minute(),
        meridiem
    )
}

/// Parse a due-date field as returned by AppleScript.
///
/// Returns `None` for an empty field or the `missing value` sentinel.
/// Otherwise the known output shapes are tried in order; anything
/// unrecognized comes back as [`AppleDate::Raw`].
#[must_use]
pub fn parse_date(raw: &str) -> Option<AppleDate> {
    let raw = raw.trim();
    if raw.is_empty() || raw == MISSING_VALUE {
        return None;
    }
    Some(match parse_native(raw) {
        Some(dt) => AppleDate::Timestamp(dt),
        None => AppleDate::Raw(raw.to_string()),
    })
}

/// ISO-8601 shapes accepted from callers.
fn parse_iso(input: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

/// Shapes `osascript` has been observed to emit for `date ... as string`.
fn parse_native(input: &str) -> Option<NaiveDateTime> {
    if let Some(dt) = parse_iso(input) {
        return Some(dt);
    }
    let formats = [
        // The literal form this crate writes: 8/26/2026 3:30:00 PM
        "%m/%d/%Y %I:%M:%S %p",
        // US locale: Wednesday, August 26, 2026 at 3:30:00 PM
        "%A, %B %d, %Y at %I:%M:%S %p",
        // Without the weekday: August 26, 2026 at 3:30:00 PM
        "%B %d, %Y at %I:%M:%S %p",
        // 24-hour locales: Wednesday, 26 August 2026 at 15:30:00
        "%A, %d %B %Y at %H:%M:%S",
        "%d %B %Y at %H:%M:%S",
    ];
    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt);
        }
    }
    None
}
