use super::*;

// =============================================================
// Role tags
// =============================================================

#[test]
fn role_tag_round_trips() {
    for role in [Role::Admin, Role::Manager, Role::Employee] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_parse_rejects_unknown_tags() {
    assert_eq!(Role::parse("root"), None);
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_displays_as_tag() {
    assert_eq!(Role::Manager.to_string(), "manager");
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_default_is_unauthenticated_and_not_loading() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.role.is_none());
    assert!(!state.loading);
}

#[test]
fn from_stored_parses_role_and_keeps_token() {
    let state = SessionState::from_stored(Some("jwt-abc".to_owned()), Some("admin".to_owned()));
    assert!(state.is_authenticated());
    assert_eq!(state.role, Some(Role::Admin));
    assert!(!state.loading);
}

#[test]
fn from_stored_empty_token_counts_as_absent() {
    let state = SessionState::from_stored(Some(String::new()), Some("employee".to_owned()));
    assert!(!state.is_authenticated());
}

#[test]
fn from_stored_unknown_role_degrades_to_none() {
    let state = SessionState::from_stored(Some("jwt-abc".to_owned()), Some("superuser".to_owned()));
    assert!(state.is_authenticated());
    assert_eq!(state.role, None);
}
