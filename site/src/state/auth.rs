//! Admin session state and the credential gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single shared username/password pair checked against build-time
//! constants. Success toggles two browser-storage flags; the state here is
//! the in-memory mirror the admin routes actually render from.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::config;
use crate::util::session;

/// The one error string shown for every failed login. Unknown user and wrong
/// password intentionally collapse into the same message.
pub const LOGIN_ERROR: &str = "Invalid username or password.";

/// Artificial delay before the credential check resolves, in milliseconds.
pub const LOGIN_DELAY_MS: u64 = 800;

/// Admin session state restored from browser storage at app mount.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl AuthState {
    /// Rebuild session state from the storage flags, once, at startup.
    #[must_use]
    pub fn restore() -> Self {
        if session::is_authenticated() {
            Self { authenticated: true, username: session::stored_username() }
        } else {
            Self::default()
        }
    }

    /// Record a successful login in storage and in memory.
    pub fn login(&mut self, username: &str) {
        session::store_login(username);
        self.authenticated = true;
        self.username = Some(username.to_owned());
    }

    /// Clear the storage flags and reset to the logged-out state.
    pub fn logout(&mut self) {
        session::clear_login();
        *self = Self::default();
    }
}

/// Compare submitted credentials against the build-time constants.
///
/// Plaintext comparison, no lockout, no rate limiting — the gate protects a
/// demo dashboard whose "password" ships inside the bundle.
#[must_use]
pub fn verify_credentials(username: &str, password: &str) -> bool {
    username == config::ADMIN_USERNAME && password == config::ADMIN_PASSWORD
}
