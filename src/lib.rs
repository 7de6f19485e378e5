//! # portal-client
//!
//! Leptos + WASM frontend for the role-based task portal. Replaces the
//! Vue 3 SPA with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the route
//! table, and the navigation guard that gates the role-scoped dashboard
//! routes on the browser session.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
