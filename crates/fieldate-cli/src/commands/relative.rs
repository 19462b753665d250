use anyhow::Result;
use fieldate_core::clock::Clock;
use fieldate_core::format::{relative_day_label, FALLBACK};

use crate::cli::RelativeCommand;

pub fn relative_dates(command: RelativeCommand, clock: &impl Clock) -> Result<()> {
    for date in &command.dates {
        match relative_day_label(date, clock) {
            Some(label) => println!("{}: {}", date, label),
            None => println!("{}: {}", date, FALLBACK),
        }
    }
    Ok(())
}
