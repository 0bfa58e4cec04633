use chrono::{TimeZone, Utc};

use crate::cli::utils::*;

#[test]
fn test_truncate_with_ellipsis_short_string() {
    assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
}

#[test]
fn test_truncate_with_ellipsis_long_string() {
    let result = truncate_with_ellipsis("hello world this is a long string", 10);
    assert_eq!(result, "hello w...");
}

#[test]
fn test_truncate_with_ellipsis_unicode() {
    assert_eq!(truncate_with_ellipsis("hello 世界", 8), "hello 世界");
    assert_eq!(truncate_with_ellipsis("hello 世界", 7), "hell...");
}

#[test]
fn test_format_optional() {
    assert_eq!(format_optional(None), "-");
    assert_eq!(format_optional(Some("")), "-");
    assert_eq!(format_optional(Some("notes")), "notes");
}

#[test]
fn test_status_label() {
    assert_eq!(status_label(true), "Done");
    assert_eq!(status_label(false), "Pending");
}

#[test]
fn test_styled_title_strikes_through_completed() {
    colored::control::set_override(true);

    let done = styled_title("Ship it", true);
    assert!(done.contains("\u{1b}[9m"), "missing strikethrough: {done:?}");
    assert_eq!(String::from_utf8(strip_ansi_escapes::strip(&done)).unwrap(), "Ship it");

    assert_eq!(styled_title("Ship it", false), "Ship it");
}

#[test]
fn test_date_format_compact() {
    let ts = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap();
    assert_eq!(DateFormat::Compact.format(&ts), "07-03-2025");
}

#[test]
fn test_date_format_full() {
    let ts = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 9).unwrap();
    assert_eq!(DateFormat::Full.format(&ts), "2025-03-07T14:05:09Z");
}

#[test]
fn test_date_format_from_flag() {
    assert_eq!(DateFormat::from_full_flag(false), DateFormat::Compact);
    assert_eq!(DateFormat::from_full_flag(true), DateFormat::Full);
}
