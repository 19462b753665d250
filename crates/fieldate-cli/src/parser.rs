use chrono::{NaiveDate, Utc};
use chrono_english::{parse_date_string, Dialect};
use chrono_tz::Tz;
use fieldate_core::error::CoreError;
use fieldate_core::parse::parse_flexible_date_in;

/// Resolve the `--today` override.
///
/// Record formats are tried first so `15/04/2024` stays day-first; anything
/// else goes through natural-language parsing relative to the current day.
pub fn parse_today(input: &str, tz: &Tz) -> Result<NaiveDate, CoreError> {
    if let Ok(date) = parse_flexible_date_in(input, tz) {
        return Ok(date);
    }
    let now = Utc::now().with_timezone(tz).fixed_offset();
    parse_date_string(input, now, Dialect::Uk)
        .map(|dt| dt.date_naive())
        .map_err(|e| CoreError::InvalidDate(format!("Failed to parse today '{}': {}", input, e)))
}
