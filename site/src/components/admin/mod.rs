//! Shared chrome for the admin dashboard screens.

pub mod confirm_dialog;
pub mod login_form;
pub mod search_bar;
pub mod shell;
