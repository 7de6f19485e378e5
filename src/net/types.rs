//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the portal API payloads so serde round-trips stay
//! lossless. The role travels as its raw tag; `state::session::Role`
//! parsing happens at the storage boundary, not here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Payload for `POST /api/signup`.
///
/// New accounts always sign up with the `employee` tag; an admin promotes
/// and approves them afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl SignupRequest {
    pub fn new(username: String, email: String, password: String) -> SignupRequest {
        SignupRequest { username, email, password, role: "employee".to_owned() }
    }
}

/// Payload for `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the session record the client stores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Issued access token.
    pub token: String,
    /// Role tag of the account (`admin`, `manager`, `employee`).
    pub role: String,
    /// Human-readable status line; informational only.
    #[serde(default)]
    pub message: Option<String>,
}
