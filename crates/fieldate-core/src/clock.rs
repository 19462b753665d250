use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::models::CalendarDate;

/// Source of "today".
///
/// Classification reads the clock once per call, so any implementation that
/// returns a stable date is enough for deterministic results.
pub trait Clock {
    fn today(&self) -> CalendarDate;

    /// Time zone used to resolve zoned timestamps into calendar dates.
    fn timezone(&self) -> Tz {
        Tz::UTC
    }
}

/// Wall clock viewed from a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}

/// A clock pinned to one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
    tz: Tz,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today, tz: Tz::UTC }
    }

    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.today
    }

    fn timezone(&self) -> Tz {
        self.tz
    }
}
