use anyhow::Result;
use chrono::Duration;
use chrono_humanize::HumanTime;
use fieldate_core::clock::Clock;
use fieldate_core::format::format_due_date;
use fieldate_core::models::{RelativeDay, UrgencyBucket};
use fieldate_core::parse::parse_flexible_date_in;
use fieldate_core::urgency::{bucket_for_days, day_difference};
use tracing::debug;

use crate::cli::{DueCommand, OutputFormat};
use crate::config::Config;
use crate::views::table::{display_due, ViewDue};

pub fn due_dates(command: DueCommand, clock: &impl Clock, config: &Config) -> Result<()> {
    let rows: Vec<ViewDue> = command.dates.iter().map(|d| build_row(d, clock)).collect();

    match command.output.unwrap_or(config.output) {
        OutputFormat::Table => display_due(&rows, config.color),
        OutputFormat::Plain => {
            for row in &rows {
                println!("{}\t{}\t{}\t{}", row.input, row.display, row.urgency, row.color);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}

pub fn build_row(input: &str, clock: &impl Clock) -> ViewDue {
    let today = clock.today();
    let days = parse_flexible_date_in(input, &clock.timezone())
        .ok()
        .map(|due| day_difference(due, today));
    debug!(input, ?days, "Classified due date");

    let urgency = days.map_or(UrgencyBucket::Unknown, bucket_for_days);
    ViewDue {
        input: input.to_string(),
        display: format_due_date(Some(input), clock),
        urgency,
        color: urgency.color(),
        days,
        distance: days.map(describe_distance),
    }
}

fn describe_distance(days: i64) -> String {
    match RelativeDay::from_days(days) {
        RelativeDay::Days(_) => HumanTime::from(Duration::days(days)).to_string(),
        label => label.to_string(),
    }
}
