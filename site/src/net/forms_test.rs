#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// Required-field checks
// =============================================================

#[test]
fn contact_submission_requires_name_email_and_message() {
    let complete = ContactSubmission {
        name: "Jordan Lee".to_owned(),
        email: "jordan@example.com".to_owned(),
        phone: String::new(),
        subject: String::new(),
        message: "Looking for listing marketing help.".to_owned(),
    };
    assert!(complete.is_complete());

    let mut missing_message = complete.clone();
    missing_message.message = "   ".to_owned();
    assert!(!missing_message.is_complete());

    assert!(!ContactSubmission::default().is_complete());
}

#[test]
fn onboarding_application_requires_contact_info_and_a_service() {
    let complete = OnboardingApplication {
        full_name: "Jordan Lee".to_owned(),
        brokerage: "Lee Realty".to_owned(),
        email: "jordan@example.com".to_owned(),
        phone: "(512) 555-0100".to_owned(),
        market: "Austin".to_owned(),
        services: vec!["Lead Generation".to_owned()],
        monthly_budget: "$1,000 - $2,500".to_owned(),
        notes: String::new(),
    };
    assert!(complete.is_complete());

    let mut no_services = complete.clone();
    no_services.services.clear();
    assert!(!no_services.is_complete());
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn contact_submission_serializes_flat_field_names() {
    let body = serde_json::to_value(ContactSubmission {
        name: "A".to_owned(),
        email: "a@b.c".to_owned(),
        phone: "1".to_owned(),
        subject: "s".to_owned(),
        message: "m".to_owned(),
    })
    .unwrap();
    for key in ["name", "email", "phone", "subject", "message"] {
        assert!(body.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn endpoints_are_hard_coded_https_urls() {
    assert!(CONTACT_ENDPOINT.starts_with("https://"));
    assert!(ONBOARDING_ENDPOINT.starts_with("https://"));
    assert_ne!(CONTACT_ENDPOINT, ONBOARDING_ENDPOINT);
}

#[test]
fn endpoint_failure_message_formats_status() {
    assert_eq!(endpoint_failed_message(422), "form endpoint returned 422");
}
