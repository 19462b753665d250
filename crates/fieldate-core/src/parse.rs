//! Flexible date parsing.
//!
//! Trial data arrives with dates serialised in several conventions: ISO
//! instants from the API, `DD/MM/YYYY` entered on device, and both
//! `YYYY-MM-DD` and `DD-MM-YYYY` from older exports. [`parse_flexible_date`]
//! resolves all of them to a [`CalendarDate`] using ordered shape detection:
//!
//! 1. contains `T` and `Z` → zoned timestamp, time of day discarded, with
//!    the generic layouts as a fallback
//! 2. contains `/` → strictly `DD/MM/YYYY`
//! 3. contains `-` → `YYYY-MM-DD` when the first component exceeds 31,
//!    otherwise `DD-MM-YYYY`
//! 4. anything else → generic month-name and RFC 2822 layouts

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::trace;

use crate::error::ParseFailure;
use crate::models::CalendarDate;

/// Largest valid day of month. A leading component above this can only be a year.
const MAX_DAY_OF_MONTH: i32 = 31;

/// Zulu-suffixed layouts accepted besides strict RFC 3339.
const ZULU_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%MZ",
];

/// Date-only layouts tried by the generic fallback.
const FALLBACK_LAYOUTS: &[&str] = &[
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
    "%A %B %d %Y",
    "%a, %d %b %Y",
];

/// The shape an input was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    ZonedTimestamp,
    DayMonthYearSlash,
    DashSeparated,
    Generic,
}

/// Classify an input by the separators it contains.
pub fn detect_shape(input: &str) -> DateShape {
    if input.contains('T') && input.contains('Z') {
        DateShape::ZonedTimestamp
    } else if input.contains('/') {
        DateShape::DayMonthYearSlash
    } else if input.contains('-') {
        DateShape::DashSeparated
    } else {
        DateShape::Generic
    }
}

/// Parse a date string, resolving zoned timestamps to their UTC calendar date.
pub fn parse_flexible_date(input: &str) -> Result<CalendarDate, ParseFailure> {
    parse_flexible_date_in(input, &Tz::UTC)
}

/// Parse a date string, resolving zoned timestamps to the calendar date they
/// fall on in `tz`.
///
/// Never panics. Every failure, whatever its cause, is [`ParseFailure`].
pub fn parse_flexible_date_in(input: &str, tz: &Tz) -> Result<CalendarDate, ParseFailure> {
    let shape = detect_shape(input);
    trace!(?shape, input, "Detected date shape");

    match shape {
        DateShape::ZonedTimestamp => parse_zoned_timestamp(input)
            .map(|instant| instant.with_timezone(tz).date_naive())
            .or_else(|_| parse_generic(input)),
        DateShape::DayMonthYearSlash => {
            let [day, month, year] = split_numeric(input, '/')?;
            calendar_date(year, month, day)
        }
        DateShape::DashSeparated => {
            let [first, second, third] = split_numeric(input, '-')?;
            if first > MAX_DAY_OF_MONTH {
                calendar_date(first, second, third)
            } else {
                calendar_date(third, second, first)
            }
        }
        DateShape::Generic => parse_generic(input),
    }
}

/// Parse an instant carrying a `Z` designator, in RFC 3339, RFC 2822 or one
/// of the Zulu layouts.
pub fn parse_zoned_timestamp(input: &str) -> Result<DateTime<Utc>, ParseFailure> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    ZULU_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or(ParseFailure)
}

fn parse_generic(input: &str) -> Result<CalendarDate, ParseFailure> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseFailure);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.date_naive());
    }
    FALLBACK_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
        .ok_or(ParseFailure)
}

/// Split into exactly three integer components.
fn split_numeric(input: &str, separator: char) -> Result<[i32; 3], ParseFailure> {
    let mut parts = input.split(separator).map(|part| part.trim().parse::<i32>());
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(a)), Some(Ok(b)), Some(Ok(c)), None) => Ok([a, b, c]),
        _ => Err(ParseFailure),
    }
}

/// Build a validated calendar date from numeric components.
///
/// Years 0 through 99 are read as 1900 through 1999, matching how the
/// records' originating runtime resolved two-digit years.
fn calendar_date(year: i32, month: i32, day: i32) -> Result<CalendarDate, ParseFailure> {
    let year = if (0..100).contains(&year) { year + 1900 } else { year };
    let month = u32::try_from(month).map_err(|_| ParseFailure)?;
    let day = u32::try_from(day).map_err(|_| ParseFailure)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseFailure)
}
