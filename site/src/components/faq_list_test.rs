#![cfg(not(feature = "csr"))]

use super::*;

fn faq(id: &str, question: &str, category: FaqCategory, order: u32, active: bool) -> Faq {
    Faq {
        id: id.to_owned(),
        question: question.to_owned(),
        answer: "Answer.".to_owned(),
        category,
        order,
        active,
    }
}

#[test]
fn visible_faqs_hides_inactive_entries() {
    let items = vec![
        faq("f-1", "Active?", FaqCategory::General, 1, true),
        faq("f-2", "Hidden?", FaqCategory::General, 2, false),
    ];
    let visible = visible_faqs(&items, None);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "f-1");
}

#[test]
fn visible_faqs_filters_by_category() {
    let items = vec![
        faq("f-1", "General?", FaqCategory::General, 1, true),
        faq("f-2", "Pricing?", FaqCategory::Pricing, 1, true),
    ];
    let visible = visible_faqs(&items, Some(FaqCategory::Pricing));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "f-2");
}

#[test]
fn visible_faqs_sorts_by_order_then_question() {
    let items = vec![
        faq("f-1", "Zebra?", FaqCategory::General, 2, true),
        faq("f-2", "Apple?", FaqCategory::General, 2, true),
        faq("f-3", "First?", FaqCategory::General, 1, true),
    ];
    let ids: Vec<String> = visible_faqs(&items, None).into_iter().map(|f| f.id).collect();
    assert_eq!(ids, ["f-3", "f-2", "f-1"]);
}

#[test]
fn chip_class_marks_selection() {
    assert_eq!(chip_class(true), "chip chip--selected");
    assert_eq!(chip_class(false), "chip");
}
