use super::*;

#[test]
fn validate_signup_input_builds_employee_request() {
    let request = validate_signup_input(" alice ", " a@b.com ", " pw ").unwrap();
    assert_eq!(request.username, "alice");
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.password, "pw");
    assert_eq!(request.role, "employee");
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(
        validate_signup_input("", "a@b.com", "pw"),
        Err("Fill in username, email and password.")
    );
    assert_eq!(
        validate_signup_input("alice", "a@b.com", "  "),
        Err("Fill in username, email and password.")
    );
}

#[test]
fn validate_signup_input_rejects_mailless_email() {
    assert_eq!(validate_signup_input("alice", "not-an-email", "pw"), Err("Enter a valid email address."));
}

#[test]
fn done_message_mentions_admin_approval() {
    assert!(SIGNUP_DONE_MESSAGE.contains("approve"));
}
