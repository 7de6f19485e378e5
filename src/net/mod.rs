//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the signup/login calls and `types` defines the shared
//! wire schema those endpoints speak.

pub mod api;
pub mod types;
