#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn storage_keys_are_namespaced() {
    assert!(AUTH_FLAG_KEY.starts_with("hearthside_"));
    assert!(USERNAME_KEY.starts_with("hearthside_"));
    assert_ne!(AUTH_FLAG_KEY, USERNAME_KEY);
}

#[test]
fn host_build_never_reports_an_active_session() {
    assert!(!is_authenticated());
    assert!(stored_username().is_none());
}

#[test]
fn store_and_clear_are_noops_but_callable() {
    store_login("admin");
    assert!(!is_authenticated());
    clear_login();
}
