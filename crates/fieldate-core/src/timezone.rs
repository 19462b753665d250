use crate::error::CoreError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Parse an IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, CoreError> {
    Tz::from_str(timezone)
        .map_err(|_| CoreError::InvalidTimezone(format!("Invalid timezone: {}", timezone)))
}

/// Get timezone offset string for display (e.g., "+0530")
pub fn get_timezone_offset(timezone: &str, at_time: DateTime<Utc>) -> Result<String, CoreError> {
    let tz = validate_timezone(timezone)?;
    let local_dt = at_time.with_timezone(&tz);
    Ok(format!("{}", local_dt.format("%z")))
}

/// Zones common across the regions trials are run in
pub fn get_common_timezones() -> Vec<&'static str> {
    vec![
        "UTC",
        "Africa/Nairobi",
        "Africa/Lagos",
        "Africa/Johannesburg",
        "America/Chicago",
        "America/Mexico_City",
        "America/Sao_Paulo",
        "America/Argentina/Buenos_Aires",
        "Asia/Kolkata",
        "Asia/Dhaka",
        "Asia/Karachi",
        "Asia/Manila",
        "Asia/Jakarta",
        "Asia/Bangkok",
        "Australia/Perth",
        "Australia/Sydney",
        "Europe/London",
        "Europe/Paris",
        "Europe/Berlin",
    ]
}

/// Suggest similar timezones for invalid input
pub fn suggest_timezone(invalid: &str) -> Vec<&'static str> {
    let invalid_lower = invalid.to_lowercase();

    let mut matches: Vec<_> = get_common_timezones()
        .into_iter()
        .filter(|tz| {
            let tz_lower = tz.to_lowercase();
            tz_lower.contains(&invalid_lower)
                || invalid_lower.contains(&tz_lower)
                || tz
                    .split('/')
                    .any(|part| part.to_lowercase().contains(&invalid_lower))
        })
        .collect();

    matches.truncate(5);
    matches
}

/// Convert user-friendly timezone input to an IANA zone
pub fn normalize_timezone_input(input: &str) -> Result<Tz, CoreError> {
    if let Ok(tz) = validate_timezone(input) {
        return Ok(tz);
    }

    let normalized = match input.to_lowercase().as_str() {
        "gmt" | "utc" | "z" => "UTC",
        "ist" | "india" => "Asia/Kolkata",
        "eat" | "nairobi" => "Africa/Nairobi",
        "wat" | "lagos" => "Africa/Lagos",
        "cet" | "paris" => "Europe/Paris",
        "bst" | "london" => "Europe/London",
        "brt" | "brasilia" => "America/Sao_Paulo",
        "cst" | "central" => "America/Chicago",
        _ => {
            let suggestions = suggest_timezone(input);
            return Err(if suggestions.is_empty() {
                CoreError::InvalidTimezone(format!(
                    "Unknown timezone '{}'. Use standard IANA names like 'Asia/Kolkata'",
                    input
                ))
            } else {
                CoreError::InvalidTimezone(format!(
                    "Unknown timezone '{}'. Did you mean: {}?",
                    input,
                    suggestions.join(", ")
                ))
            });
        }
    };

    validate_timezone(normalized)
}
