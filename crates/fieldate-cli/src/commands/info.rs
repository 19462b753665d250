use anyhow::Result;
use fieldate_core::clock::Clock;
use fieldate_core::models::{ProtocolInfo, ProtocolSummary};

use crate::cli::{InfoCommand, OutputFormat};
use crate::config::Config;
use crate::views::table::display_protocol;

pub fn show_info(command: InfoCommand, clock: &impl Clock, config: &Config) -> Result<()> {
    let info = ProtocolInfo::new(command.stage, command.sown, command.due);

    // Nothing to render when every field is missing
    let Some(summary) = info.summarize(clock) else {
        return Ok(());
    };

    match command.output.unwrap_or(config.output) {
        OutputFormat::Table => display_protocol(&summary, config.color),
        OutputFormat::Plain => println!("{}", plain_line(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn plain_line(summary: &ProtocolSummary) -> String {
    let mut parts = Vec::with_capacity(summary.field_count);
    if let Some(stage) = &summary.stage_name {
        parts.push(stage.clone());
    }
    if let Some(sowing) = &summary.sowing {
        parts.push(format!("DOS: {}", sowing));
    }
    if let Some(due) = &summary.due {
        parts.push(due.clone());
    }
    parts.join(" | ")
}
