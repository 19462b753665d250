use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone};

use crate::clock::Clock;
use crate::models::{CalendarDate, UrgencyBucket};
use crate::parse::parse_flexible_date_in;

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Inclusive upper bound, in days, of the due-soon window.
pub const DUE_SOON_DAYS: i64 = 3;

/// Midnight at the start of `date`.
pub fn start_of_day(date: CalendarDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Signed whole days from `today` to `due`, rounding any positive remainder up.
pub fn day_difference(due: CalendarDate, today: CalendarDate) -> i64 {
    let millis = (start_of_day(due) - start_of_day(today)).num_milliseconds();
    let days = millis / MS_PER_DAY;
    if millis % MS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Bucket a signed day difference.
pub fn bucket_for_days(days: i64) -> UrgencyBucket {
    if days < 0 {
        UrgencyBucket::Overdue
    } else if days <= DUE_SOON_DAYS {
        UrgencyBucket::DueSoon
    } else {
        UrgencyBucket::DueLater
    }
}

pub fn classify_urgency(due: CalendarDate, today: CalendarDate) -> UrgencyBucket {
    bucket_for_days(day_difference(due, today))
}

/// Classify two zoned instants after truncating both to the start of their day.
pub fn classify_instant<Tz: TimeZone>(due: &DateTime<Tz>, now: &DateTime<Tz>) -> UrgencyBucket {
    classify_urgency(due.date_naive(), now.date_naive())
}

/// Classify a raw due-date string against the clock's today.
///
/// Absent or unparseable input is [`UrgencyBucket::Unknown`].
pub fn classify_due_date(input: Option<&str>, clock: &impl Clock) -> UrgencyBucket {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return UrgencyBucket::Unknown;
    };
    match parse_flexible_date_in(raw, &clock.timezone()) {
        Ok(due) => classify_urgency(due, clock.today()),
        Err(_) => UrgencyBucket::Unknown,
    }
}

pub fn due_date_color(input: Option<&str>, clock: &impl Clock) -> &'static str {
    classify_due_date(input, clock).color()
}

/// A color with the low-opacity alpha suffix used for tinted backgrounds.
pub fn tinted_background(color: &str) -> String {
    format!("{}15", color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, NaiveDate, Utc};
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock::new(ymd(2024, 4, 15))
    }

    #[rstest]
    #[case(-1, UrgencyBucket::Overdue)]
    #[case(-30, UrgencyBucket::Overdue)]
    #[case(0, UrgencyBucket::DueSoon)]
    #[case(1, UrgencyBucket::DueSoon)]
    #[case(3, UrgencyBucket::DueSoon)]
    #[case(4, UrgencyBucket::DueLater)]
    #[case(365, UrgencyBucket::DueLater)]
    fn test_boundaries(#[case] offset: i64, #[case] expected: UrgencyBucket) {
        let today = ymd(2024, 4, 15);
        let due = today + Duration::days(offset);
        assert_eq!(day_difference(due, today), offset);
        assert_eq!(classify_urgency(due, today), expected);
    }

    #[test]
    fn test_day_difference_across_month_and_year() {
        assert_eq!(day_difference(ymd(2024, 3, 1), ymd(2024, 2, 28)), 2);
        assert_eq!(day_difference(ymd(2025, 1, 1), ymd(2024, 12, 31)), 1);
        assert_eq!(day_difference(ymd(2024, 12, 31), ymd(2025, 1, 1)), -1);
    }

    #[test]
    fn test_classify_instant_ignores_time_of_day() {
        let now = Utc.with_ymd_and_hms(2024, 4, 15, 23, 59, 0).unwrap();
        let due = Utc.with_ymd_and_hms(2024, 4, 14, 0, 1, 0).unwrap();
        assert_eq!(classify_instant(&due, &now), UrgencyBucket::Overdue);

        let due = Utc.with_ymd_and_hms(2024, 4, 19, 23, 59, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 4, 15, 0, 0, 0).unwrap();
        assert_eq!(classify_instant(&due, &now), UrgencyBucket::DueLater);

        let due = Utc.with_ymd_and_hms(2024, 4, 18, 23, 59, 0).unwrap();
        assert_eq!(classify_instant(&due, &now), UrgencyBucket::DueSoon);
    }

    #[rstest]
    #[case(Some("2024-04-16"), UrgencyBucket::DueSoon, "#D69E2E")]
    #[case(Some("10/04/2024"), UrgencyBucket::Overdue, "#E53E3E")]
    #[case(Some("15-04-2024"), UrgencyBucket::DueSoon, "#D69E2E")]
    #[case(Some("2024-04-20T08:00:00Z"), UrgencyBucket::DueLater, "#38A169")]
    #[case(Some("not-a-date"), UrgencyBucket::Unknown, "#999")]
    #[case(Some(""), UrgencyBucket::Unknown, "#999")]
    #[case(None, UrgencyBucket::Unknown, "#999")]
    fn test_classify_due_date(
        #[case] input: Option<&str>,
        #[case] bucket: UrgencyBucket,
        #[case] color: &str,
    ) {
        assert_eq!(classify_due_date(input, &clock()), bucket);
        assert_eq!(due_date_color(input, &clock()), color);
    }

    #[test]
    fn test_timestamp_uses_clock_timezone() {
        // 20:00Z on the 18th is already the 19th in Tokyo
        let tokyo = clock().with_timezone(chrono_tz::Asia::Tokyo);
        let input = Some("2024-04-18T20:00:00Z");
        assert_eq!(classify_due_date(input, &clock()), UrgencyBucket::DueSoon);
        assert_eq!(classify_due_date(input, &tokyo), UrgencyBucket::DueLater);
    }

    #[test]
    fn test_tinted_background() {
        assert_eq!(tinted_background("#E53E3E"), "#E53E3E15");
        assert_eq!(tinted_background(UrgencyBucket::Unknown.color()), "#99915");
    }
}
