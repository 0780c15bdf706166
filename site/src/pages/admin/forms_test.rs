#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// List fields
// =============================================================

#[test]
fn lines_to_list_trims_and_drops_blanks() {
    let parsed = lines_to_list("  first\n\n  second  \n   \nthird");
    assert_eq!(parsed, ["first", "second", "third"]);
}

#[test]
fn list_to_lines_round_trips_through_lines_to_list() {
    let items = vec!["one".to_owned(), "two".to_owned()];
    assert_eq!(lines_to_list(&list_to_lines(&items)), items);
}

// =============================================================
// Optional fields
// =============================================================

#[test]
fn optional_field_collapses_whitespace_to_none() {
    assert_eq!(optional_field("   "), None);
    assert_eq!(optional_field(" https://example.com "), Some("https://example.com".to_owned()));
}

// =============================================================
// Stats
// =============================================================

#[test]
fn parse_stats_splits_on_pipe() {
    let stats = parse_stats("312% | more calls\n#1 | map pack");
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].value, "312%");
    assert_eq!(stats[0].label, "more calls");
}

#[test]
fn parse_stats_skips_malformed_lines_and_caps_at_three() {
    let stats = parse_stats("a | b\nno pipe here\nc | d\ne | f\ng | h");
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[2].value, "e");
}

#[test]
fn stats_to_lines_round_trips() {
    let stats = parse_stats("11 | closings\n$38 | cost per lead");
    assert_eq!(parse_stats(&stats_to_lines(&stats)), stats);
}

// =============================================================
// Business hours
// =============================================================

#[test]
fn parse_hours_splits_days_and_hours() {
    let rows = parse_hours("Monday – Friday | 9:00 AM – 6:00 PM\nSunday | Closed");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].days, "Sunday");
    assert_eq!(rows[1].hours, "Closed");
}

#[test]
fn hours_to_lines_round_trips() {
    let rows = parse_hours("Saturday | 10:00 AM – 2:00 PM");
    assert_eq!(parse_hours(&hours_to_lines(&rows)), rows);
}

// =============================================================
// Numeric fields
// =============================================================

#[test]
fn parse_rating_clamps_and_defaults() {
    assert_eq!(parse_rating("4"), 4);
    assert_eq!(parse_rating("0"), 1);
    assert_eq!(parse_rating("12"), 5);
    assert_eq!(parse_rating("not a number"), 5);
}

#[test]
fn parse_order_defaults_to_end_of_list() {
    assert_eq!(parse_order("3"), 3);
    assert_eq!(parse_order(""), 99);
}
