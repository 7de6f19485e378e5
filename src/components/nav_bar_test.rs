use super::*;
use crate::state::session::Role;

#[test]
fn identity_label_names_the_role() {
    let session = SessionState {
        token: Some("jwt".to_owned()),
        role: Some(Role::Manager),
        loading: false,
    };
    assert_eq!(identity_label(&session), "signed in as manager");
}

#[test]
fn identity_label_without_role_is_generic() {
    let session = SessionState {
        token: Some("jwt".to_owned()),
        role: None,
        loading: false,
    };
    assert_eq!(identity_label(&session), "signed in");
}

#[test]
fn identity_label_signed_out_is_guest() {
    assert_eq!(identity_label(&SessionState::default()), "guest");
}
