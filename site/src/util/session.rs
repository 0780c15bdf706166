//! Browser-storage session flags for the admin gate.
//!
//! Two keys, written at login and cleared at logout: a boolean auth flag and
//! the username. No expiry, no signing. Outside the browser every helper is
//! a no-op so host-side tests and non-`csr` builds stay deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Storage key holding `"true"` while an admin session is active.
pub const AUTH_FLAG_KEY: &str = "hearthside_admin_auth";

/// Storage key holding the logged-in username.
pub const USERNAME_KEY: &str = "hearthside_admin_user";

/// Whether a previous login left the auth flag set.
#[must_use]
pub fn is_authenticated() -> bool {
    #[cfg(feature = "csr")]
    {
        read_item(AUTH_FLAG_KEY).is_some_and(|value| value == "true")
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Username persisted by the last login, if any.
#[must_use]
pub fn stored_username() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        read_item(USERNAME_KEY)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the auth flag and username after a successful login.
pub fn store_login(username: &str) {
    #[cfg(feature = "csr")]
    {
        write_item(AUTH_FLAG_KEY, "true");
        write_item(USERNAME_KEY, username);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = username;
    }
}

/// Drop both session keys at logout.
pub fn clear_login() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(AUTH_FLAG_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
fn read_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(feature = "csr")]
fn write_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}
