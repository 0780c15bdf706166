use super::*;

#[test]
fn admin_credentials_have_compiled_defaults() {
    assert!(!ADMIN_USERNAME.is_empty());
    assert!(!ADMIN_PASSWORD.is_empty());
}

#[test]
fn analytics_id_has_a_compiled_default() {
    assert!(!ANALYTICS_MEASUREMENT_ID.is_empty());
}
