use anyhow::Result;
use fieldate_core::clock::Clock;
use fieldate_core::models::LastUpdated;

use crate::cli::UpdatedCommand;
use crate::views::table::display_last_updated;

pub fn show_last_updated(command: UpdatedCommand, clock: &impl Clock) -> Result<()> {
    let record = LastUpdated {
        date: command.date,
        time: command.time,
        updated_by: command.updated_by,
        location: command.location,
    };

    if !record.has_data() {
        println!("No updates recorded.");
        return Ok(());
    }

    display_last_updated(&record.summarize(clock));
    Ok(())
}
