use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_decodes_string_id() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","name":"Asha","email":"asha@example.com","role":"student"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, "student");
}

#[test]
fn user_decodes_integer_id() {
    let user: User = serde_json::from_str(r#"{"id":42,"name":"Ravi","email":"r@example.com","role":"tutor"}"#).unwrap();
    assert_eq!(user.id, "42");
}

#[test]
fn user_accepts_underscore_id_alias() {
    let user: User = serde_json::from_str(
        r#"{"_id":"65f0c1","name":"Meera","email":"m@example.com","role":"student"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "65f0c1");
}

#[test]
fn user_rejects_fractional_id() {
    let result = serde_json::from_str::<User>(r#"{"id":1.5,"name":"X","email":"x@example.com","role":"student"}"#);
    assert!(result.is_err());
}

#[test]
fn user_rejects_missing_role() {
    let result = serde_json::from_str::<User>(r#"{"id":"u1","name":"X","email":"x@example.com"}"#);
    assert!(result.is_err());
}

// =============================================================
// Requests and responses
// =============================================================

#[test]
fn register_request_serializes_role_lowercase() {
    let req = RegisterRequest {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::Tutor,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "name": "Asha", "email": "asha@example.com", "password": "pw", "role": "tutor" })
    );
}

#[test]
fn register_response_defaults_missing_fields() {
    let resp: RegisterResponse = serde_json::from_str("{}").unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message, None);
}

#[test]
fn login_response_carries_token_and_user() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"success":true,"token":"t-1","user":{"id":"u1","name":"Asha","email":"a@example.com","role":"student"}}"#,
    )
    .unwrap();
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("t-1"));
    assert_eq!(resp.user.map(|u| u.name), Some("Asha".to_owned()));
}
