use anyhow::Result;
use chrono::Utc;
use fieldate_core::timezone::{get_common_timezones, get_timezone_offset, suggest_timezone};

use crate::cli::TimezonesCommand;
use crate::views::table::{display_timezones, ViewTimezone};

pub fn list_timezones(command: TimezonesCommand) -> Result<()> {
    let names = match command.search.as_deref() {
        Some(pattern) => suggest_timezone(pattern),
        None => get_common_timezones(),
    };

    let now = Utc::now();
    let zones = names
        .into_iter()
        .map(|name| -> Result<ViewTimezone> {
            Ok(ViewTimezone {
                name,
                offset: get_timezone_offset(name, now)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    display_timezones(&zones);
    Ok(())
}
