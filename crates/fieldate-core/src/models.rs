use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A resolved year/month/day with no time-of-day component.
pub type CalendarDate = NaiveDate;

/// How close a due date is to today.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyBucket {
    Overdue,
    DueSoon,
    DueLater,
    Unknown,
}

impl UrgencyBucket {
    pub const ALL: [UrgencyBucket; 4] = [
        UrgencyBucket::Overdue,
        UrgencyBucket::DueSoon,
        UrgencyBucket::DueLater,
        UrgencyBucket::Unknown,
    ];

    /// Hex color used to render the bucket.
    pub fn color(&self) -> &'static str {
        match self {
            UrgencyBucket::Overdue => "#E53E3E",
            UrgencyBucket::DueSoon => "#D69E2E",
            UrgencyBucket::DueLater => "#38A169",
            UrgencyBucket::Unknown => "#999",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyBucket::Overdue => "overdue",
            UrgencyBucket::DueSoon => "due-soon",
            UrgencyBucket::DueLater => "due-later",
            UrgencyBucket::Unknown => "unknown",
        }
    }
}

impl fmt::Display for UrgencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid urgency bucket: {0}")]
pub struct ParseUrgencyBucketError(String);

impl FromStr for UrgencyBucket {
    type Err = ParseUrgencyBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "overdue" => Ok(UrgencyBucket::Overdue),
            "due-soon" | "duesoon" => Ok(UrgencyBucket::DueSoon),
            "due-later" | "duelater" => Ok(UrgencyBucket::DueLater),
            "unknown" => Ok(UrgencyBucket::Unknown),
            _ => Err(ParseUrgencyBucketError(s.to_string())),
        }
    }
}

/// Stage information shown at the top of a protocol card.
///
/// All fields are raw strings from the trial data model and any of them may
/// be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolInfo {
    pub stage_name: Option<String>,
    pub date_of_sowing: Option<String>,
    pub due_date: Option<String>,
}

/// Display-ready rendering of a [`ProtocolInfo`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProtocolSummary {
    pub stage_name: Option<String>,
    /// Compact date of sowing, e.g. `18 Mar`.
    pub sowing: Option<String>,
    /// Due display, e.g. `Due: 21 Mar`.
    pub due: Option<String>,
    pub urgency: Option<UrgencyBucket>,
    pub color: Option<&'static str>,
    pub background: Option<String>,
    pub field_count: usize,
    pub is_single_field: bool,
}

/// Audit trail of the last change made to a recorded trait value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LastUpdated {
    pub date: Option<String>,
    pub time: Option<String>,
    pub updated_by: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LastUpdatedSummary {
    pub date: String,
    pub time: String,
    pub updated_by: String,
    pub location: String,
}

/// Relative description of a date seen from today.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "days")]
pub enum RelativeDay {
    Today,
    Tomorrow,
    Yesterday,
    /// Signed day count, never -1, 0 or 1. Build through [`RelativeDay::from_days`].
    Days(i64),
}

impl RelativeDay {
    pub fn from_days(days: i64) -> Self {
        match days {
            0 => RelativeDay::Today,
            1 => RelativeDay::Tomorrow,
            -1 => RelativeDay::Yesterday,
            n => RelativeDay::Days(n),
        }
    }
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeDay::Today => write!(f, "Today"),
            RelativeDay::Tomorrow => write!(f, "Tomorrow"),
            RelativeDay::Yesterday => write!(f, "Yesterday"),
            RelativeDay::Days(n) => write!(f, "{} days", n),
        }
    }
}
