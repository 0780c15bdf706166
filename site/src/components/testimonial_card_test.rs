#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn star_row_fills_to_the_rating() {
    assert_eq!(star_row(5), "★★★★★");
    assert_eq!(star_row(3), "★★★☆☆");
    assert_eq!(star_row(1), "★☆☆☆☆");
}

#[test]
fn star_row_clamps_out_of_range_ratings() {
    assert_eq!(star_row(0), "★☆☆☆☆");
    assert_eq!(star_row(9), "★★★★★");
}
