//! REST API helpers for communicating with the portal server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so signup and
//! login failures surface as inline form messages without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, LoginResponse, SignupRequest};

#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_ENDPOINT: &str = "/api/signup";

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_ENDPOINT: &str = "/api/login";

#[cfg(any(test, feature = "hydrate"))]
fn signup_failed_message(status: u16) -> String {
    match status {
        409 => "An account with that username or email already exists.".to_owned(),
        status => format!("signup failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 => "Invalid credentials.".to_owned(),
        403 => "Account not approved yet. Please wait for admin approval.".to_owned(),
        status => format!("login failed: {status}"),
    }
}

/// Create a new account via `POST /api/signup`.
///
/// The account starts unapproved; login stays rejected until an admin
/// approves it.
pub async fn signup(req: &SignupRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGNUP_ENDPOINT)
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(signup_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("signup is only available in the browser".to_owned())
    }
}

/// Exchange credentials for a session via `POST /api/login`.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("login is only available in the browser".to_owned())
    }
}
