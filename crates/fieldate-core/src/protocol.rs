use crate::clock::Clock;
use crate::format::{
    format_compact_date_in, format_display_date, format_display_time, format_due_date, FALLBACK,
};
use crate::models::{LastUpdated, LastUpdatedSummary, ProtocolInfo, ProtocolSummary};
use crate::urgency::{classify_due_date, tinted_background};

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl ProtocolInfo {
    pub fn new(
        stage_name: Option<String>,
        date_of_sowing: Option<String>,
        due_date: Option<String>,
    ) -> Self {
        Self {
            stage_name,
            date_of_sowing,
            due_date,
        }
    }

    /// Number of populated fields.
    pub fn field_count(&self) -> usize {
        [&self.stage_name, &self.date_of_sowing, &self.due_date]
            .into_iter()
            .filter(|field| present(field).is_some())
            .count()
    }

    /// Render the card contents. `None` when there is nothing to show.
    pub fn summarize(&self, clock: &impl Clock) -> Option<ProtocolSummary> {
        let field_count = self.field_count();
        if field_count == 0 {
            return None;
        }

        let due = present(&self.due_date);
        let urgency = due.map(|raw| classify_due_date(Some(raw), clock));
        let color = urgency.map(|bucket| bucket.color());

        Some(ProtocolSummary {
            stage_name: present(&self.stage_name).map(str::to_string),
            sowing: present(&self.date_of_sowing)
                .map(|raw| format_compact_date_in(Some(raw), clock)),
            due: due.map(|raw| format_due_date(Some(raw), clock)),
            urgency,
            color,
            background: color.map(tinted_background),
            field_count,
            is_single_field: field_count == 1,
        })
    }
}

impl LastUpdated {
    /// Whether any audit field is populated.
    pub fn has_data(&self) -> bool {
        [&self.date, &self.time, &self.updated_by, &self.location]
            .into_iter()
            .any(|field| present(field).is_some())
    }

    /// Display values, with zoned timestamps resolved in the clock's zone.
    pub fn summarize(&self, clock: &impl Clock) -> LastUpdatedSummary {
        LastUpdatedSummary {
            date: format_display_date(present(&self.date), clock),
            time: format_display_time(present(&self.time)),
            updated_by: present(&self.updated_by).unwrap_or(FALLBACK).to_string(),
            location: present(&self.location).unwrap_or(FALLBACK).to_string(),
        }
    }
}
