use super::*;
use crate::routes::{ROUTE_TABLE, find_route};

fn session(token: Option<&str>, role: Option<Role>) -> SessionState {
    SessionState {
        token: token.map(str::to_owned),
        role,
        loading: false,
    }
}

// =============================================================
// Auth branch
// =============================================================

#[test]
fn auth_route_without_token_redirects_to_login() {
    let access = RouteAccess::for_role(Role::Admin);
    let decision = decide(&access, &session(None, None));
    assert_eq!(decision, GuardDecision::RedirectLogin);
}

#[test]
fn every_auth_route_redirects_login_when_signed_out() {
    let signed_out = session(None, None);
    for meta in ROUTE_TABLE.iter().filter(|m| m.access.requires_auth) {
        assert_eq!(
            decide(&meta.access, &signed_out),
            GuardDecision::RedirectLogin,
            "{}",
            meta.path
        );
    }
}

#[test]
fn auth_precedes_role_check() {
    // No token and no role: login wins over the role mismatch.
    let access = RouteAccess::for_role(Role::Manager);
    assert_eq!(decide(&access, &session(None, None)), GuardDecision::RedirectLogin);
}

// =============================================================
// Role branch
// =============================================================

#[test]
fn role_mismatch_redirects_home() {
    let access = RouteAccess::for_role(Role::Admin);
    let decision = decide(&access, &session(Some("jwt"), Some(Role::Employee)));
    assert_eq!(decision, GuardDecision::RedirectHome { required: Role::Admin });
}

#[test]
fn token_without_role_still_fails_role_scoped_route() {
    let access = RouteAccess::for_role(Role::Manager);
    let decision = decide(&access, &session(Some("jwt"), None));
    assert_eq!(decision, GuardDecision::RedirectHome { required: Role::Manager });
}

#[test]
fn matching_role_allows() {
    for role in [Role::Admin, Role::Manager, Role::Employee] {
        let access = RouteAccess::for_role(role);
        assert_eq!(decide(&access, &session(Some("jwt"), Some(role))), GuardDecision::Allow);
    }
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn public_routes_allow_any_session() {
    let sessions = [
        session(None, None),
        session(Some("jwt"), Some(Role::Admin)),
        session(Some("jwt"), None),
    ];
    for meta in ROUTE_TABLE.iter().filter(|m| !m.access.requires_auth) {
        for s in &sessions {
            assert_eq!(decide(&meta.access, s), GuardDecision::Allow, "{}", meta.path);
        }
    }
}

#[test]
fn unauthenticated_home_visit_allows() {
    let meta = find_route("/").unwrap();
    assert_eq!(decide(&meta.access, &session(None, None)), GuardDecision::Allow);
}

// =============================================================
// Alert copy
// =============================================================

#[test]
fn mismatch_message_names_required_role() {
    assert!(role_mismatch_message(Role::Admin).contains("admin"));
    assert!(role_mismatch_message(Role::Manager).contains("manager"));
}
