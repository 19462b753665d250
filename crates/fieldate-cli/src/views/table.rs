use comfy_table::{Attribute, Cell, Color, Row, Table};
use fieldate_core::models::{LastUpdatedSummary, ProtocolSummary, UrgencyBucket};
use serde::Serialize;

use crate::util::hex_to_color;

#[derive(Debug, Clone, Serialize)]
pub struct ViewDue {
    pub input: String,
    pub display: String,
    pub urgency: UrgencyBucket,
    pub color: &'static str,
    pub days: Option<i64>,
    pub distance: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ViewTimezone {
    pub name: &'static str,
    pub offset: String,
}

fn urgency_cell(text: impl ToString, bucket: UrgencyBucket, use_color: bool) -> Cell {
    let cell = Cell::new(text);
    if !use_color {
        return cell;
    }
    let cell = match hex_to_color(bucket.color()) {
        Some(color) => cell.fg(color),
        None => cell,
    };
    match bucket {
        UrgencyBucket::Overdue => cell.add_attribute(Attribute::Bold),
        _ => cell,
    }
}

pub fn display_due(rows: &[ViewDue], use_color: bool) {
    let mut table = Table::new();
    table.set_header(vec!["Input", "Due", "Urgency", "Days", "When"]);

    for due in rows {
        let mut row = Row::new();
        row.add_cell(Cell::new(&due.input));
        row.add_cell(urgency_cell(&due.display, due.urgency, use_color));
        row.add_cell(urgency_cell(due.urgency, due.urgency, use_color));
        row.add_cell(Cell::new(
            due.days.map_or_else(|| "-".to_string(), |d| d.to_string()),
        ));
        row.add_cell(Cell::new(due.distance.as_deref().unwrap_or("-")));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_protocol(summary: &ProtocolSummary, use_color: bool) {
    let mut table = Table::new();
    let mut header = Vec::new();
    let mut row = Row::new();

    if let Some(stage) = &summary.stage_name {
        header.push("Stage");
        row.add_cell(Cell::new(stage).add_attribute(Attribute::Bold));
    }
    if let Some(sowing) = &summary.sowing {
        header.push("DOS");
        row.add_cell(Cell::new(sowing));
    }
    if let Some(due) = &summary.due {
        header.push("Due");
        let bucket = summary.urgency.unwrap_or(UrgencyBucket::Unknown);
        row.add_cell(urgency_cell(format!("● {}", due), bucket, use_color));
    }

    table.set_header(header);
    table.add_row(row);
    println!("{table}");
}

pub fn display_last_updated(summary: &LastUpdatedSummary) {
    let mut table = Table::new();
    table.set_header(vec![Cell::new("Last Updated").add_attribute(Attribute::Bold)]);
    for (label, value) in [
        ("Date:", &summary.date),
        ("Time:", &summary.time),
        ("Updated by:", &summary.updated_by),
        ("Location:", &summary.location),
    ] {
        table.add_row(vec![Cell::new(label).fg(Color::DarkGrey), Cell::new(value)]);
    }
    println!("{table}");
}

pub fn display_timezones(zones: &[ViewTimezone]) {
    if zones.is_empty() {
        println!("No timezones found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Timezone", "Offset"]);
    for zone in zones {
        table.add_row(vec![Cell::new(zone.name), Cell::new(&zone.offset)]);
    }
    println!("{table}");
}
