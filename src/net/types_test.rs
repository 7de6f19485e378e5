use super::*;

#[test]
fn signup_request_defaults_to_employee_role() {
    let req = SignupRequest::new("alice".to_owned(), "a@b.com".to_owned(), "pw".to_owned());
    assert_eq!(req.role, "employee");
}

#[test]
fn signup_request_serializes_expected_fields() {
    let req = SignupRequest::new("alice".to_owned(), "a@b.com".to_owned(), "pw".to_owned());
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "username": "alice",
            "email": "a@b.com",
            "password": "pw",
            "role": "employee",
        })
    );
}

#[test]
fn login_response_parses_server_payload() {
    let raw = r#"{"token":"jwt-abc","message":"Successfully logged in","role":"manager"}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "jwt-abc");
    assert_eq!(resp.role, "manager");
    assert_eq!(resp.message.as_deref(), Some("Successfully logged in"));
}

#[test]
fn login_response_message_is_optional() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t","role":"admin"}"#).unwrap();
    assert_eq!(resp.message, None);
}
