//! Path builders for the role-scoped routes.
//!
//! Route shapes: `/login/{role}`, `/register/{role}`, `/{role}/dashboard`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::register::Role;

pub const HOME: &str = "/";
pub const LOGIN_PREFIX: &str = "/login";
pub const REGISTER_PREFIX: &str = "/register";

pub fn login_path(role: Role) -> String {
    format!("{LOGIN_PREFIX}/{}", role.as_str())
}

pub fn register_path(role: Role) -> String {
    format!("{REGISTER_PREFIX}/{}", role.as_str())
}

/// Dashboard for a user's role tag. Takes the raw string since stored users
/// may carry roles outside [`Role`].
pub fn dashboard_path(role: &str) -> String {
    format!("/{role}/dashboard")
}

/// Landing page after logout.
pub fn logout_redirect() -> String {
    login_path(Role::Student)
}

pub fn is_login_path(path: &str) -> bool {
    path.starts_with(LOGIN_PREFIX)
}

pub fn is_register_path(path: &str) -> bool {
    path.starts_with(REGISTER_PREFIX)
}
