use anyhow::Result;
use fieldate_core::clock::Clock;
use fieldate_core::format::format_compact_date_in;

use crate::cli::FormatCommand;

pub fn format_dates(command: FormatCommand, clock: &impl Clock) -> Result<()> {
    for date in &command.dates {
        println!("{}", format_compact_date_in(Some(date), clock));
    }
    Ok(())
}
