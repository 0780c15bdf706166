use super::*;

#[test]
fn timestamp_id_formats_milliseconds_as_integer_string() {
    assert_eq!(timestamp_id(1_754_556_000_000.0), "1754556000000");
}

#[test]
fn timestamp_id_drops_fractional_milliseconds() {
    assert_eq!(timestamp_id(1_754_556_000_123.7), "1754556000124");
}

#[test]
fn timestamp_id_clamps_negative_clock_readings() {
    assert_eq!(timestamp_id(-42.0), "0");
}
