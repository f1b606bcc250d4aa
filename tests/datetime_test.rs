use chrono::{Datelike, NaiveDate};
use gardenist::utils::datetime::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(day(2025, 1, 15)), "2025-01-15");
}

#[test]
fn test_parse_calendar_day_shapes() {
    let expected = Some(day(2025, 3, 9));
    assert_eq!(parse_calendar_day("2025-03-09"), expected);
    assert_eq!(parse_calendar_day("2025-03-09T23:59:59Z"), expected);
    assert_eq!(parse_calendar_day("2025-03-09T01:00:00+09:00"), expected);
    assert_eq!(parse_calendar_day("2025-03-09T14:30:00"), expected);
    assert_eq!(parse_calendar_day(" 2025-03-09 14:30:00 "), expected);
    assert_eq!(parse_calendar_day("09/03/2025"), None);
}

#[test]
fn test_add_days_crosses_month() {
    assert_eq!(add_days(day(2025, 1, 30), 6), day(2025, 2, 5));
}

#[test]
fn test_format_relative_day() {
    let today = day(2025, 6, 10); // Tuesday
    assert_eq!(format_relative_day(today, today), "today");
    assert_eq!(format_relative_day(day(2025, 6, 11), today), "tomorrow");
    assert_eq!(format_relative_day(day(2025, 6, 9), today), "yesterday");
    assert_eq!(format_relative_day(day(2025, 6, 13), today), "next Friday");
    assert_eq!(format_relative_day(day(2025, 6, 5), today), "last Thursday");
    assert_eq!(format_relative_day(day(2025, 8, 1), today), "Aug 01");
    assert_eq!(format_relative_day(day(2026, 1, 2), today), "Jan 02, 2026");
}

#[test]
fn test_today_is_local_date() {
    let today = today();
    assert!(today.year() >= 2024);
}
