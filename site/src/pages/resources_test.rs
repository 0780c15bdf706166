#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn guide_slugs_are_unique() {
    let mut slugs: Vec<&str> = GUIDES.iter().map(|guide| guide.slug).collect();
    let before = slugs.len();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), before);
}

#[test]
fn find_guide_resolves_known_slugs() {
    let guide = find_guide("listing-prep-checklist").expect("known slug");
    assert_eq!(guide.title, "The Listing Prep Checklist");
}

#[test]
fn find_guide_rejects_unknown_slugs() {
    assert!(find_guide("not-a-guide").is_none());
}

#[test]
fn every_guide_has_sections() {
    for guide in &GUIDES {
        assert!(!guide.sections.is_empty(), "guide {} has no sections", guide.slug);
    }
}
