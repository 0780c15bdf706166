//! Build-time configuration injected through environment variables.
//!
//! All three values are compiled into the shipped bundle and readable by
//! anyone inspecting it. The admin gate is a content-editing convenience for
//! a demo shell, not a security boundary.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Admin username checked by the login gate.
pub const ADMIN_USERNAME: &str = match option_env!("SITE_ADMIN_USERNAME") {
    Some(value) => value,
    None => "admin",
};

/// Admin password checked by the login gate, compared in plaintext.
pub const ADMIN_PASSWORD: &str = match option_env!("SITE_ADMIN_PASSWORD") {
    Some(value) => value,
    None => "hearthside2026",
};

/// Google Analytics measurement id rendered into the document head.
pub const ANALYTICS_MEASUREMENT_ID: &str = match option_env!("SITE_ANALYTICS_ID") {
    Some(value) => value,
    None => "G-HRTHSDE001",
};
