//! Browser localStorage glue for the session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flows write two string keys (token, role) and logout clears
//! them; everything else only reads. Centralizing the web-sys glue keeps
//! pages free of hydrate conditionals.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths report a
//! still-loading session so server rendering stays deterministic and the
//! guard holds off until hydration has read real values.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use crate::state::session::{Role, SessionState};

/// Storage key holding the access token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the role tag.
pub const ROLE_KEY: &str = "role";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the session record from `localStorage`.
///
/// On the server this returns a loading placeholder; the real values are
/// only knowable in the browser.
pub fn load_session() -> SessionState {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return SessionState::from_stored(None, None);
        };
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let role = storage.get_item(ROLE_KEY).ok().flatten();
        SessionState::from_stored(token, role)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionState { loading: true, ..SessionState::default() }
    }
}

/// Persist a freshly issued session. Called by the login flows.
pub fn store_session(token: &str, role: Role) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(ROLE_KEY, role.as_str());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, role);
    }
}

/// Remove the session record. Called by logout.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
