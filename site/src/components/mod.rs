//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and content cards while reading shared
//! state from Leptos context providers; route-level orchestration stays in
//! `pages`.

pub mod admin;
pub mod case_study_card;
pub mod contact_form;
pub mod cta_banner;
pub mod faq_list;
pub mod onboarding_form;
pub mod pricing_table;
pub mod reveal;
pub mod service_card;
pub mod site_footer;
pub mod site_header;
pub mod success_modal;
pub mod team_card;
pub mod testimonial_card;
