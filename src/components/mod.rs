//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading session state from the
//! Leptos context provider. `route_guard` is mounted once under the router
//! and enforces the route table on every navigation.

pub mod nav_bar;
pub mod route_guard;
