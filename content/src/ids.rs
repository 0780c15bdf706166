//! Client-side id generation for admin-created records.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

/// Build a timestamp-based record id from a milliseconds-since-epoch clock
/// reading. The UI layer feeds this `js_sys::Date::now()`; tests feed fixed
/// values. Uniqueness is best-effort within a single session — there is no
/// store to collide against.
#[must_use]
pub fn timestamp_id(now_ms: f64) -> String {
    let ms = now_ms.max(0.0);
    format!("{ms:.0}")
}
