use super::*;

#[test]
fn admin_destination_accepts_admin_tag() {
    assert_eq!(admin_destination("admin"), Ok("/admin/dashboard"));
}

#[test]
fn admin_destination_rejects_other_roles() {
    assert_eq!(admin_destination("manager"), Err("This account is not an administrator."));
    assert_eq!(admin_destination("employee"), Err("This account is not an administrator."));
    assert_eq!(admin_destination("nonsense"), Err("This account is not an administrator."));
}

#[test]
fn validate_login_input_matches_regular_login_rules() {
    assert!(validate_login_input("a@b.com", "pw").is_ok());
    assert!(validate_login_input(" ", "pw").is_err());
}
