//! Login workflow: credential checks and the exchange that establishes a
//! session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::AccountApi;
use crate::net::types::{LoginRequest, User};
use crate::state::register::Role;
use crate::state::toast::Notifier;
use crate::util::routes;

pub const SIGNING_IN: &str = "Signing in...";
pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Enter both email and password.")]
    MissingCredentials,
}

/// Check the login form locally and build the request body.
///
/// # Errors
///
/// Returns [`LoginError::MissingCredentials`] when either field is blank.
pub fn validate_login_input(email: &str, password: &str, role: Role) -> Result<LoginRequest, LoginError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned(), role })
}

/// Run one login attempt.
///
/// On success `on_login` receives the user and opaque token and the
/// dashboard path for that user is returned.
pub async fn submit_login<A, N, L>(
    api: &A,
    notifier: &N,
    email: &str,
    password: &str,
    role: Role,
    on_login: L,
) -> Option<String>
where
    A: AccountApi,
    N: Notifier,
    L: FnOnce(User, String),
{
    let request = match validate_login_input(email, password, role) {
        Ok(request) => request,
        Err(e) => {
            notifier.error(None, &e.to_string());
            return None;
        }
    };

    let toast = notifier.loading(SIGNING_IN);
    let outcome = match api.login(&request).await {
        Ok(resp) => match (resp.success, resp.user, resp.token) {
            (true, Some(user), Some(token)) if !token.is_empty() => Ok((user, token)),
            _ => Err(resp.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| LOGIN_FAILED.to_owned())),
        },
        Err(e) => {
            log::warn!("login request failed: {e}");
            Err(e.user_message().unwrap_or(LOGIN_FAILED).to_owned())
        }
    };

    match outcome {
        Ok((user, token)) => {
            notifier.success(Some(toast), &format!("Welcome back, {}!", user.name));
            let dashboard = routes::dashboard_path(&user.role);
            on_login(user, token);
            Some(dashboard)
        }
        Err(message) => {
            notifier.error(Some(toast), &message);
            None
        }
    }
}
