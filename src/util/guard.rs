//! Navigation guard evaluated on every attempt to enter a route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once under the router so every navigation sees the same
//! behavior: missing token on an auth route redirects to `/login`, a role
//! mismatch on a role-scoped route raises a blocking alert and redirects
//! home, anything else proceeds. The guard only reads the session; it
//! never writes storage.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{HOME_PATH, LOGIN_PATH, RouteAccess, find_route};
use crate::state::session::{Role, SessionState};

/// Outcome of evaluating a route's access metadata against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation proceeds.
    Allow,
    /// No token stored for an auth-required route.
    RedirectLogin,
    /// Stored role differs from the route's required role.
    RedirectHome { required: Role },
}

/// Decide what to do with a navigation attempt.
///
/// The auth check runs first, so an unauthenticated visit to a role-scoped
/// route lands on `/login`, not home.
pub fn decide(access: &RouteAccess, session: &SessionState) -> GuardDecision {
    if access.requires_auth && !session.is_authenticated() {
        return GuardDecision::RedirectLogin;
    }
    if let Some(required) = access.role {
        if session.role != Some(required) {
            return GuardDecision::RedirectHome { required };
        }
    }
    GuardDecision::Allow
}

/// Alert text shown before the role-mismatch redirect.
pub fn role_mismatch_message(required: Role) -> String {
    format!("You do not have access to this page. It requires the {required} role.")
}

/// Install the guard under the router.
///
/// Re-evaluates whenever the pathname or the session signal changes; holds
/// off while the session is still loading so SSR output never commits to a
/// redirect. Paths missing from the table belong to the router's not-found
/// fallback and carry no access metadata to enforce.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        let path = pathname.get();
        if state.loading {
            return;
        }
        let Some(meta) = find_route(&path) else {
            return;
        };
        match decide(&meta.access, &state) {
            GuardDecision::Allow => {}
            GuardDecision::RedirectLogin => {
                navigate(LOGIN_PATH, NavigateOptions::default());
            }
            GuardDecision::RedirectHome { required } => {
                blocking_alert(&role_mismatch_message(required));
                navigate(HOME_PATH, NavigateOptions::default());
            }
        }
    });
}

/// Synchronous `window.alert`. No-op outside the browser.
fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
