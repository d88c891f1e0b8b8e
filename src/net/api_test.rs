use super::*;

#[test]
fn endpoint_is_same_origin_by_default() {
    let api = HttpAccountApi::new(&ClientConfig::default());
    assert_eq!(api.endpoint(REGISTER_ENDPOINT), "/api/auth/register");
}

#[test]
fn endpoint_prefixes_configured_base_url() {
    let config = ClientConfig { api_base_url: "https://api.example.com".to_owned(), ..ClientConfig::default() };
    let api = HttpAccountApi::new(&config);
    assert_eq!(api.endpoint(LOGIN_ENDPOINT), "https://api.example.com/api/auth/login");
}

#[test]
fn rejected_extracts_server_message() {
    let err = rejected(409, r#"{"success":false,"message":"Email already registered"}"#);
    assert_eq!(err, ApiError::Rejected { status: 409, message: Some("Email already registered".to_owned()) });
    assert_eq!(err.user_message(), Some("Email already registered"));
}

#[test]
fn rejected_without_json_body_has_no_message() {
    let err = rejected(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Rejected { status: 502, message: None });
    assert_eq!(err.user_message(), None);
}

#[test]
fn blank_server_message_is_ignored() {
    let err = ApiError::Rejected { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(err.user_message(), None);
}

#[test]
fn transport_errors_have_no_user_message() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), None);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(), None);
    assert_eq!(ApiError::Unavailable.user_message(), None);
}

#[test]
fn error_display_formats_status() {
    assert_eq!(ApiError::Rejected { status: 401, message: None }.to_string(), "request rejected (401)");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_off_the_browser() {
    use crate::state::register::Role;

    let api = HttpAccountApi::default();
    let request = LoginRequest { email: "a@example.com".to_owned(), password: "pw".to_owned(), role: Role::Student };
    assert_eq!(futures::executor::block_on(api.login(&request)), Err(ApiError::Unavailable));
}
