use super::*;
use crate::fixtures;
use crate::model::Testimonial;

fn sample(id: &str, name: &str) -> Testimonial {
    Testimonial {
        id: id.to_owned(),
        name: name.to_owned(),
        role: "Agent".to_owned(),
        quote: "Great results.".to_owned(),
        image: String::new(),
        rating: 5,
        featured: false,
        date: "May 2026".to_owned(),
    }
}

// =============================================================
// Seeding and accessors
// =============================================================

#[test]
fn seeded_preserves_fixture_order() {
    let editor = ListEditor::seeded(fixtures::testimonials());
    let ids: Vec<&str> = editor.items().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t-1", "t-2", "t-3", "t-4", "t-5"]);
}

#[test]
fn default_editor_is_empty() {
    let editor: ListEditor<Testimonial> = ListEditor::default();
    assert!(editor.is_empty());
    assert_eq!(editor.len(), 0);
}

#[test]
fn get_finds_record_by_id() {
    let editor = ListEditor::seeded(fixtures::testimonials());
    assert_eq!(editor.get("t-3").map(|t| t.name.as_str()), Some("Elena Vasquez"));
    assert!(editor.get("missing").is_none());
}

// =============================================================
// Add
// =============================================================

#[test]
fn add_prepends_record() {
    let mut editor = ListEditor::seeded(fixtures::testimonials());
    editor.add(sample("t-new", "New Client"));
    assert_eq!(editor.items()[0].id, "t-new");
    assert_eq!(editor.len(), 6);
}

#[test]
fn add_then_search_by_name_returns_exactly_that_record() {
    let mut editor = ListEditor::seeded(fixtures::testimonials());
    editor.add(sample("t-new", "Quincy Abernathy"));
    let hits = editor.search("Quincy Abernathy");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "t-new");
}

// =============================================================
// Update
// =============================================================

#[test]
fn update_patches_matching_record_in_place() {
    let mut editor = ListEditor::seeded(fixtures::testimonials());
    let patched = editor.update("t-4", |t| {
        t.rating = 5;
        t.featured = true;
    });
    assert!(patched);
    let record = editor.get("t-4").unwrap();
    assert_eq!(record.rating, 5);
    assert!(record.featured);
}

#[test]
fn update_unknown_id_returns_false_and_changes_nothing() {
    let mut editor = ListEditor::seeded(fixtures::testimonials());
    let before = editor.clone();
    assert!(!editor.update("missing", |t| t.rating = 1));
    assert_eq!(editor, before);
}

// =============================================================
// Remove
// =============================================================

#[test]
fn remove_deletes_exactly_the_matching_record() {
    let mut editor = ListEditor::seeded(fixtures::testimonials());
    let survivors: Vec<Testimonial> = editor
        .items()
        .iter()
        .filter(|t| t.id != "t-2")
        .cloned()
        .collect();

    assert!(editor.remove("t-2"));

    assert_eq!(editor.len(), 4);
    assert_eq!(editor.items(), survivors.as_slice());
}

#[test]
fn remove_unknown_id_returns_false() {
    let mut editor = ListEditor::seeded(fixtures::testimonials());
    assert!(!editor.remove("missing"));
    assert_eq!(editor.len(), 5);
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_empty_query_returns_everything() {
    let editor = ListEditor::seeded(fixtures::testimonials());
    assert_eq!(editor.search("").len(), editor.len());
    assert_eq!(editor.search("   ").len(), editor.len());
}

#[test]
fn search_is_case_insensitive() {
    let editor = ListEditor::seeded(fixtures::testimonials());
    let lower = editor.search("sarah");
    let upper = editor.search("SARAH");
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].id, upper[0].id);
}

#[test]
fn search_matches_substrings_across_fields() {
    let editor = ListEditor::seeded(fixtures::testimonials());
    // "magazine" only appears inside Elena's quote text.
    let hits = editor.search("magazine");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "t-3");
}

#[test]
fn search_without_matches_returns_empty() {
    let editor = ListEditor::seeded(fixtures::testimonials());
    assert!(editor.search("zzzzzz").is_empty());
}

// =============================================================
// Reload semantics
// =============================================================

#[test]
fn reseeding_discards_all_mutations() {
    let original = ListEditor::seeded(fixtures::testimonials());
    let mut editor = original.clone();
    editor.add(sample("t-new", "New Client"));
    editor.remove("t-1");
    editor.update("t-2", |t| t.rating = 1);

    // A "reload" rebuilds state from the fixtures; nothing survives.
    let reloaded = ListEditor::seeded(fixtures::testimonials());
    assert_eq!(reloaded, original);
    assert!(reloaded.get("t-new").is_none());
    assert_eq!(reloaded.get("t-2").unwrap().rating, 5);
}
