use anyhow::Result;
use fieldate_core::clock::Clock;
use fieldate_core::urgency::classify_due_date;
use tracing::info;

use crate::cli::ClassifyCommand;

pub fn classify_date(command: ClassifyCommand, clock: &impl Clock) -> Result<()> {
    let bucket = classify_due_date(Some(&command.date), clock);
    info!(date = %command.date, %bucket, "Classified");
    println!("{} {}", serde_plain::to_string(&bucket)?, bucket.color());
    Ok(())
}
