use super::*;
use time::macros::datetime;

#[test]
fn parses_plain_dates_at_midnight() {
    assert_eq!(parse_date_obj("2024-06-01"), Some(datetime!(2024-06-01 0:00)));
}

#[test]
fn parses_local_date_times() {
    assert_eq!(
        parse_date_obj("2024-06-01T18:30"),
        Some(datetime!(2024-06-01 18:30))
    );
    assert_eq!(
        parse_date_obj("2024-06-01 18:30:15"),
        Some(datetime!(2024-06-01 18:30:15))
    );
}

#[test]
fn rfc3339_is_normalized_to_utc() {
    assert_eq!(
        parse_date_obj("2024-06-01T12:00:00+02:00"),
        Some(datetime!(2024-06-01 10:00))
    );
    assert_eq!(
        parse_date_obj("2024-06-01T12:00:00Z"),
        Some(datetime!(2024-06-01 12:00))
    );
}

#[test]
fn parses_long_english_dates() {
    assert_eq!(parse_date_obj("March 5, 2025"), Some(datetime!(2025-03-05 0:00)));
    assert_eq!(parse_date_obj("Sep 12, 2024"), Some(datetime!(2024-09-12 0:00)));
}

#[test]
fn garbage_is_none() {
    assert_eq!(parse_date_obj("sometime soon"), None);
    assert_eq!(parse_date_obj(""), None);
}
