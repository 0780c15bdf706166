#![cfg(not(feature = "csr"))]

use super::*;

// =============================================================
// verify_credentials
// =============================================================

#[test]
fn configured_pair_passes_the_gate() {
    assert!(verify_credentials(config::ADMIN_USERNAME, config::ADMIN_PASSWORD));
}

#[test]
fn wrong_password_fails_the_gate() {
    assert!(!verify_credentials(config::ADMIN_USERNAME, "not-the-password"));
}

#[test]
fn unknown_user_fails_the_gate() {
    assert!(!verify_credentials("someone-else", config::ADMIN_PASSWORD));
}

#[test]
fn empty_input_fails_the_gate() {
    assert!(!verify_credentials("", ""));
}

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn restore_without_stored_flags_is_logged_out() {
    let state = AuthState::restore();
    assert!(!state.authenticated);
    assert!(state.username.is_none());
}

#[test]
fn login_sets_in_memory_session() {
    let mut state = AuthState::default();
    state.login("admin");
    assert!(state.authenticated);
    assert_eq!(state.username.as_deref(), Some("admin"));
}

#[test]
fn logout_resets_to_default() {
    let mut state = AuthState::default();
    state.login("admin");
    state.logout();
    assert_eq!(state, AuthState::default());
}

#[test]
fn login_error_is_a_single_static_message() {
    assert_eq!(LOGIN_ERROR, "Invalid username or password.");
    assert!(LOGIN_DELAY_MS > 0);
}
