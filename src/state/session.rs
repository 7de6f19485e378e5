//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hydrated once from `localStorage` at app start and provided via context.
//! The navigation guard and identity-aware chrome read it to coordinate
//! redirects and rendering; only login and logout flows write the backing
//! storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

/// Role tag attached to an account, as stored by the login flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl Role {
    /// The wire/storage tag for this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    /// Parse a stored tag. Unknown tags yield `None` rather than an error
    /// so a stale or tampered storage value degrades to "no role".
    pub fn parse(tag: &str) -> Option<Role> {
        match tag {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session state tracking the stored token and role.
///
/// `loading` stays set until storage has been read so guards do not
/// redirect off a session that simply has not loaded yet.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub loading: bool,
}

impl SessionState {
    /// Build session state from raw storage values.
    pub fn from_stored(token: Option<String>, role_tag: Option<String>) -> SessionState {
        SessionState {
            token: token.filter(|t| !t.is_empty()),
            role: role_tag.as_deref().and_then(Role::parse),
            loading: false,
        }
    }

    /// Whether a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
