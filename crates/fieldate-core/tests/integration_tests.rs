use chrono::{Duration, NaiveDate};
use fieldate_core::clock::{Clock, FixedClock};
use fieldate_core::error::ParseFailure;
use fieldate_core::format::{format_compact_date, format_compact_date_in, format_due_date};
use fieldate_core::models::{ProtocolInfo, UrgencyBucket};
use fieldate_core::parse::parse_flexible_date;
use fieldate_core::urgency::{classify_due_date, classify_urgency, due_date_color};
use rstest::rstest;

/// Helper function to pin today to the reference day used throughout
fn reference_clock() -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(2024, 4, 15).expect("valid reference date"))
}

#[test]
fn test_due_tomorrow_is_due_soon() {
    let clock = reference_clock();
    let bucket = classify_due_date(Some("2024-04-16"), &clock);
    assert_eq!(bucket, UrgencyBucket::DueSoon);
    assert_eq!(bucket.color(), "#D69E2E");
}

#[test]
fn test_day_first_past_date_is_overdue() {
    let clock = reference_clock();
    let bucket = classify_due_date(Some("10/04/2024"), &clock);
    assert_eq!(bucket, UrgencyBucket::Overdue);
    assert_eq!(bucket.color(), "#E53E3E");
}

#[test]
fn test_christmas_is_day_first() {
    let date = parse_flexible_date("25/12/2024").expect("day-first date should parse");
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
}

#[test]
fn test_both_dash_conventions_agree() {
    assert_eq!(format_compact_date(Some("2024-03-18")), "18 Mar");
    assert_eq!(format_compact_date(Some("18-03-2024")), "18 Mar");
    assert_eq!(
        parse_flexible_date("2024-03-18"),
        parse_flexible_date("18-03-2024")
    );
}

#[rstest]
#[case(-1, UrgencyBucket::Overdue)]
#[case(0, UrgencyBucket::DueSoon)]
#[case(3, UrgencyBucket::DueSoon)]
#[case(4, UrgencyBucket::DueLater)]
fn test_boundaries_through_every_input_shape(#[case] offset: i64, #[case] expected: UrgencyBucket) {
    let clock = reference_clock();
    let due = clock.today() + Duration::days(offset);

    assert_eq!(classify_urgency(due, clock.today()), expected);
    for input in [
        due.format("%Y-%m-%d").to_string(),
        due.format("%d-%m-%Y").to_string(),
        due.format("%d/%m/%Y").to_string(),
        due.format("%Y-%m-%dT12:00:00Z").to_string(),
        due.format("%B %d, %Y").to_string(),
    ] {
        assert_eq!(classify_due_date(Some(&input), &clock), expected, "input {}", input);
    }
}

#[rstest]
#[case(Some(""))]
#[case(None)]
#[case(Some("not-a-date"))]
#[case(Some("2024-13-45"))]
fn test_malformed_input_falls_back(#[case] input: Option<&str>) {
    let clock = reference_clock();
    if let Some(raw) = input {
        assert_eq!(parse_flexible_date(raw), Err(ParseFailure));
    }
    assert_eq!(format_compact_date(input), "-");
    assert_eq!(format_due_date(input, &clock), "-");
    assert_eq!(classify_due_date(input, &clock), UrgencyBucket::Unknown);
    assert_eq!(due_date_color(input, &clock), "#999");
}

#[test]
fn test_formatting_is_idempotent() {
    for input in ["2024-03-18", "31/12/1999", "garbage", "", "2025-09-23T18:30:00Z"] {
        assert_eq!(
            format_compact_date(Some(input)),
            format_compact_date(Some(input))
        );
    }
}

#[test]
fn test_ambiguous_dash_date_is_a_known_limitation() {
    // Day-first wins whenever the leading part could be a day, even if the
    // record was written month-first
    assert_eq!(format_compact_date(Some("05-04-2024")), "5 Apr");
    assert_eq!(format_compact_date(Some("04-05-2024")), "4 May");
}

#[test]
fn test_timestamp_near_midnight_follows_clock_zone() {
    let clock = reference_clock().with_timezone(chrono_tz::America::Los_Angeles);
    assert_eq!(
        format_compact_date_in(Some("2024-04-16T03:00:00Z"), &clock),
        "15 Apr"
    );
    assert_eq!(
        classify_due_date(Some("2024-04-14T05:00:00Z"), &clock),
        UrgencyBucket::Overdue
    );
}

#[test]
fn test_protocol_card_workflow() {
    let clock = reference_clock();
    let cards = vec![
        ProtocolInfo::new(Some("Emergence".into()), Some("2024-03-01".into()), Some("05/04/2024".into())),
        ProtocolInfo::new(Some("Flowering".into()), None, Some("2024-04-17".into())),
        ProtocolInfo::new(Some("Harvest".into()), None, Some("2024-06-30T00:00:00Z".into())),
        ProtocolInfo::new(Some("Notes only".into()), None, None),
        ProtocolInfo::default(),
    ];

    let summaries: Vec<_> = cards.iter().map(|card| card.summarize(&clock)).collect();

    assert_eq!(summaries[0].as_ref().unwrap().urgency, Some(UrgencyBucket::Overdue));
    assert_eq!(summaries[0].as_ref().unwrap().sowing.as_deref(), Some("1 Mar"));
    assert_eq!(summaries[1].as_ref().unwrap().urgency, Some(UrgencyBucket::DueSoon));
    assert_eq!(summaries[2].as_ref().unwrap().urgency, Some(UrgencyBucket::DueLater));
    assert_eq!(summaries[2].as_ref().unwrap().due.as_deref(), Some("Due: 30 Jun"));

    let notes = summaries[3].as_ref().unwrap();
    assert!(notes.is_single_field);
    assert!(notes.urgency.is_none());
    assert!(notes.color.is_none());

    assert!(summaries[4].is_none());
}
