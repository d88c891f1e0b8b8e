use super::*;
use crate::test_support::user;

fn signed_out() -> SessionState {
    SessionState::resolved(None)
}

#[test]
fn loading_session_hides_account_area() {
    for path in ["/", "/login/student", "/register/tutor", "/tutor/dashboard"] {
        assert_eq!(account_links(&SessionState::default(), path), AccountLinks::Hidden, "path {path}");
    }
}

#[test]
fn signed_in_user_gets_greeting() {
    assert_eq!(
        account_links(&SessionState::resolved(Some(user("student"))), "/login/student"),
        AccountLinks::SignedIn { greeting: "Welcome, Asha".to_owned() }
    );
}

#[test]
fn signed_out_on_home_shows_both_links() {
    assert_eq!(
        account_links(&signed_out(), "/"),
        AccountLinks::SignedOut { show_login: true, show_sign_up: true }
    );
}

#[test]
fn login_page_hides_login_link() {
    assert_eq!(
        account_links(&signed_out(), "/login/tutor"),
        AccountLinks::SignedOut { show_login: false, show_sign_up: true }
    );
}

#[test]
fn register_page_hides_sign_up_link() {
    assert_eq!(
        account_links(&signed_out(), "/register/student"),
        AccountLinks::SignedOut { show_login: true, show_sign_up: false }
    );
}

#[test]
fn section_links_point_at_site_sections() {
    let hrefs: Vec<&str> = SECTION_LINKS.iter().map(|(_, href)| *href).collect();
    assert_eq!(hrefs, ["/teaching", "/training", "/research"]);
}
