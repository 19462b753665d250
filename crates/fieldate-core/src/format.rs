use chrono::Datelike;

use crate::clock::Clock;
use crate::models::{CalendarDate, RelativeDay};
use crate::parse::parse_flexible_date_in;
use crate::urgency::day_difference;

/// Shown wherever a date is absent or cannot be read.
pub const FALLBACK: &str = "-";

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `"{day} {Mon}"` for a resolved date, e.g. `18 Mar`. The year is omitted.
pub fn compact(date: CalendarDate) -> String {
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!("{} {}", date.day(), month)
}

/// Compact display of a raw date string, or `-` when it cannot be read.
///
/// Zoned timestamps resolve in UTC; use [`format_compact_date_in`] to pick
/// the zone from a clock.
pub fn format_compact_date(input: Option<&str>) -> String {
    format_compact_date_with(input, &chrono_tz::Tz::UTC)
}

pub fn format_compact_date_in(input: Option<&str>, clock: &impl Clock) -> String {
    format_compact_date_with(input, &clock.timezone())
}

fn format_compact_date_with(input: Option<&str>, tz: &chrono_tz::Tz) -> String {
    input
        .filter(|s| !s.is_empty())
        .and_then(|raw| parse_flexible_date_in(raw, tz).ok())
        .map(compact)
        .unwrap_or_else(|| FALLBACK.to_string())
}

/// `Due: 18 Mar`, or `-` when the date cannot be read.
pub fn format_due_date(input: Option<&str>, clock: &impl Clock) -> String {
    let formatted = format_compact_date_in(input, clock);
    if formatted == FALLBACK {
        formatted
    } else {
        format!("Due: {}", formatted)
    }
}

/// Day-first `DD/MM/YYYY` display used for audit timestamps.
///
/// Input already in that exact shape is returned untouched; input that
/// cannot be read is also returned untouched. Zoned timestamps resolve in
/// the clock's zone.
pub fn format_display_date(input: Option<&str>, clock: &impl Clock) -> String {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return FALLBACK.to_string();
    };
    if is_padded_day_month_year(raw) {
        return raw.to_string();
    }
    match parse_flexible_date_in(raw, &clock.timezone()) {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Drop the seconds from an `HH:MM:SS` time.
pub fn format_display_time(input: Option<&str>) -> String {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return FALLBACK.to_string();
    };
    let mut parts = raw.split(':');
    match (parts.next(), parts.next()) {
        (Some(hours), Some(minutes)) => format!("{}:{}", hours, minutes),
        _ => raw.to_string(),
    }
}

pub fn relative_day(date: CalendarDate, today: CalendarDate) -> RelativeDay {
    RelativeDay::from_days(day_difference(date, today))
}

/// Relative label for a raw date string, `None` when it cannot be read.
pub fn relative_day_label(input: &str, clock: &impl Clock) -> Option<RelativeDay> {
    parse_flexible_date_in(input, &clock.timezone())
        .ok()
        .map(|date| relative_day(date, clock.today()))
}

fn is_padded_day_month_year(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}
