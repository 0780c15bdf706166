use super::*;

// =============================================================
// Testimonial
// =============================================================

#[test]
fn clamp_rating_limits_to_star_range() {
    assert_eq!(Testimonial::clamp_rating(0), 1);
    assert_eq!(Testimonial::clamp_rating(3), 3);
    assert_eq!(Testimonial::clamp_rating(9), 5);
}

#[test]
fn testimonial_search_text_covers_name_role_and_quote() {
    let record = Testimonial {
        id: "t-x".to_owned(),
        name: "Jordan Lee".to_owned(),
        role: "Seller".to_owned(),
        quote: "Sold fast.".to_owned(),
        image: String::new(),
        rating: 4,
        featured: false,
        date: "April 2026".to_owned(),
    };
    let fields = crate::editor::Record::search_text(&record);
    assert_eq!(fields, vec!["Jordan Lee", "Seller", "Sold fast."]);
}

// =============================================================
// FaqCategory
// =============================================================

#[test]
fn faq_category_default_is_general() {
    assert_eq!(FaqCategory::default(), FaqCategory::General);
}

#[test]
fn faq_category_all_lists_every_variant_once() {
    assert_eq!(FaqCategory::ALL.len(), 4);
    for (i, a) in FaqCategory::ALL.iter().enumerate() {
        for (j, b) in FaqCategory::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn faq_category_labels_are_human_readable() {
    assert_eq!(FaqCategory::General.label(), "General");
    assert_eq!(FaqCategory::Process.label(), "Process");
}

#[test]
fn faq_category_serializes_lowercase() {
    let json = serde_json::to_string(&FaqCategory::Pricing).unwrap();
    assert_eq!(json, "\"pricing\"");
}

// =============================================================
// ServicePricing
// =============================================================

#[test]
fn service_pricing_search_text_includes_plan_names() {
    let group = ServicePricing {
        id: "p-x".to_owned(),
        service: "Lead Generation".to_owned(),
        icon: "target".to_owned(),
        plans: vec![PricingPlan {
            name: "Launch".to_owned(),
            price: "$750".to_owned(),
            period: "per month".to_owned(),
            features: vec![],
            popular: false,
            icon: "rocket".to_owned(),
        }],
    };
    let fields = crate::editor::Record::search_text(&group);
    assert!(fields.contains(&"Lead Generation"));
    assert!(fields.contains(&"Launch"));
}

// =============================================================
// SocialLinks
// =============================================================

#[test]
fn social_links_default_has_no_profiles() {
    let links = SocialLinks::default();
    assert!(links.linkedin.is_none());
    assert!(links.twitter.is_none());
    assert!(links.facebook.is_none());
    assert!(links.instagram.is_none());
}
