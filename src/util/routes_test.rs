use super::*;

#[test]
fn role_paths_format_expected_routes() {
    assert_eq!(login_path(Role::Tutor), "/login/tutor");
    assert_eq!(register_path(Role::Student), "/register/student");
    assert_eq!(dashboard_path("tutor"), "/tutor/dashboard");
}

#[test]
fn logout_lands_on_student_login() {
    assert_eq!(logout_redirect(), "/login/student");
}

#[test]
fn prefix_checks_match_nested_paths() {
    assert!(is_login_path("/login/tutor"));
    assert!(!is_login_path("/register/student"));
    assert!(is_register_path("/register/tutor"));
    assert!(!is_register_path("/"));
}
