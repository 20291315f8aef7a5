use super::*;

#[test]
fn display_date_takes_calendar_part() {
    assert_eq!(display_date("2024-01-01T00:00:00.000Z"), "2024-01-01");
}

#[test]
fn display_date_time_includes_minutes() {
    assert_eq!(display_date_time("2024-03-05T14:07:59.123Z"), "2024-03-05 14:07");
}

#[test]
fn display_date_time_without_time_keeps_date() {
    assert_eq!(display_date_time("2024-03-05"), "2024-03-05");
}

#[test]
fn non_iso_input_is_passed_through() {
    assert_eq!(display_date(""), "");
    assert_eq!(display_date("yesterday"), "yesterday");
    assert_eq!(display_date_time("n/a"), "n/a");
}
