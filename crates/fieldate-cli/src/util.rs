use anyhow::Result;
use comfy_table::Color;
use fieldate_core::clock::{Clock, FixedClock, SystemClock};
use tracing::debug;

use crate::config::Config;
use crate::parser::parse_today;

/// Build the clock for this invocation. "Today" is read exactly once.
pub fn resolve_clock(
    config: &Config,
    timezone: Option<&str>,
    today: Option<&str>,
) -> Result<FixedClock> {
    let tz = config.resolve_timezone(timezone)?;
    let today = match today {
        Some(input) => parse_today(input, &tz)?,
        None => SystemClock::new(tz).today(),
    };
    debug!(timezone = %tz, %today, "Resolved clock");
    Ok(FixedClock::new(today).with_timezone(tz))
}

/// Parse `#RRGGBB` or `#RGB` into a table color.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let (r, g, b) = match hex.len() {
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            (expand(0)?, expand(1)?, expand(2)?)
        }
        _ => return None,
    };
    Some(Color::Rgb { r, g, b })
}
