//! Admin dashboard screens, one per managed content family.
//!
//! ARCHITECTURE
//! ============
//! Every list screen instantiates the same pieces: a `ListEditor` context, a
//! search bar, an add/edit dialog, and the blocking delete confirmation.
//! Only the dialog form fields differ per family.

pub mod case_studies;
pub mod contact_settings;
pub mod dashboard;
pub mod faq;
pub mod forms;
pub mod pricing;
pub mod services;
pub mod team;
pub mod testimonials;
