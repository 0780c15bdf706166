//! # site
//!
//! Leptos CSR frontend for the Hearthside Realty Group marketing site and
//! its in-memory admin dashboard.
//!
//! This crate contains pages, components, reactive state, the browser
//! utility layer (storage, scroll reveal, build-time config), and the
//! third-party forms client. Content data and editing semantics live in the
//! sibling `content` crate. Browser-only code is gated behind the `csr`
//! feature; host builds exist so the logic tests run with plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
