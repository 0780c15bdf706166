#![cfg(not(feature = "csr"))]

use super::*;
use content::fixtures;

#[test]
fn featured_first_moves_featured_studies_to_the_front() {
    let ordered = featured_first(&fixtures::case_studies());
    let featured_count = ordered.iter().filter(|study| study.featured).count();
    assert!(featured_count > 0);
    assert!(ordered[..featured_count].iter().all(|study| study.featured));
    assert!(ordered[featured_count..].iter().all(|study| !study.featured));
}

#[test]
fn featured_first_keeps_relative_order_within_groups() {
    let studies = fixtures::case_studies();
    let ordered = featured_first(&studies);

    let original_featured: Vec<&str> = studies
        .iter()
        .filter(|study| study.featured)
        .map(|study| study.id.as_str())
        .collect();
    let ordered_featured: Vec<&str> = ordered
        .iter()
        .filter(|study| study.featured)
        .map(|study| study.id.as_str())
        .collect();
    assert_eq!(original_featured, ordered_featured);
}
