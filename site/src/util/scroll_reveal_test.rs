#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// RevealOptions
// =============================================================

#[test]
fn default_options_match_the_shared_reveal_contract() {
    let options = RevealOptions::default();
    assert!((options.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(options.root_margin, "0px");
    assert!(options.trigger_once);
}

// =============================================================
// next_visible
// =============================================================

#[test]
fn trigger_once_latches_after_first_intersection() {
    // Entering the viewport reveals.
    assert!(next_visible(false, true, true));
    // Leaving again does not hide.
    assert!(next_visible(true, false, true));
    // Re-entering changes nothing.
    assert!(next_visible(true, true, true));
}

#[test]
fn trigger_once_transitions_at_most_once_per_mount() {
    let events = [false, true, false, true, false, true];
    let mut visible = false;
    let mut transitions = 0;
    for intersecting in events {
        let next = next_visible(visible, intersecting, true);
        if next != visible {
            transitions += 1;
        }
        visible = next;
    }
    assert_eq!(transitions, 1);
    assert!(visible);
}

#[test]
fn without_trigger_once_visibility_tracks_intersection() {
    assert!(next_visible(false, true, false));
    assert!(!next_visible(true, false, false));
}

#[test]
fn hidden_element_stays_hidden_until_it_intersects() {
    assert!(!next_visible(false, false, true));
    assert!(!next_visible(false, false, false));
}

// =============================================================
// reveal_class
// =============================================================

#[test]
fn reveal_class_toggles_visible_modifier() {
    assert_eq!(reveal_class(false), "reveal");
    assert_eq!(reveal_class(true), "reveal is-visible");
}

#[test]
fn host_build_signal_stays_hidden() {
    let node = NodeRef::new();
    let visible = use_scroll_reveal(node, RevealOptions::default());
    assert!(!visible.get_untracked());
}
