//! Reactive application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Admin content lists are `RwSignal<ListEditor<_>>` values seeded from
//! fixtures at the app root; this module owns the remaining session state.

pub mod auth;
