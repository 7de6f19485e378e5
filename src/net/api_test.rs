use super::*;

#[test]
fn endpoints_are_api_scoped() {
    assert_eq!(SIGNUP_ENDPOINT, "/api/signup");
    assert_eq!(LOGIN_ENDPOINT, "/api/login");
}

#[test]
fn login_failure_messages_follow_server_semantics() {
    assert_eq!(login_failed_message(401), "Invalid credentials.");
    assert_eq!(
        login_failed_message(403),
        "Account not approved yet. Please wait for admin approval."
    );
    assert_eq!(login_failed_message(500), "login failed: 500");
}

#[test]
fn signup_failure_messages_cover_conflict() {
    assert!(signup_failed_message(409).contains("already exists"));
    assert_eq!(signup_failed_message(500), "signup failed: 500");
}
