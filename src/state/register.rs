//! Registration workflow: role routing, form validation, submission, and the
//! per-role post-success plan.
//!
//! DESIGN
//! ======
//! Everything here is independent of Leptos. The page feeds signals in and
//! executes the navigation commands that come back, so each step can be
//! tested with fake API and notifier implementations.
//!
//! Phase machine: `Idle -> Submitting -> {Success, Failed}`. `Failed` is as
//! editable as `Idle`; `Success` is terminal for the form instance.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::net::api::AccountApi;
use crate::net::types::RegisterRequest;
use crate::state::session::SessionState;
use crate::state::toast::Notifier;
use crate::util::routes;

pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";
pub const CREATING_ACCOUNT: &str = "Creating your account...";
pub const ACCOUNT_CREATED: &str = "Account Created Successfully!";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const AWAITING_APPROVAL: &str = "Please wait for Admin approval before logging in.";
pub const AWAITING_APPROVAL_ICON: &str = "⏳";

/// Account role accepted by the register and login routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Tutor => "tutor",
        }
    }

    /// Capitalized label for headings.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Tutor => "Tutor",
        }
    }

    /// Tutor accounts need external approval before first login.
    pub fn requires_approval(self) -> bool {
        matches!(self, Self::Tutor)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "tutor" => Ok(Self::Tutor),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// What a role-scoped auth page should do before rendering its form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthPageGuard {
    /// Session rehydration has not resolved yet.
    Wait,
    /// Route parameter not available yet.
    AwaitRole,
    /// Leave the page for this path.
    Redirect(String),
    /// Render the form for this role.
    Show(Role),
}

/// Guard shared by the register and login pages.
///
/// A signed-in user goes to their own dashboard; an unknown role goes home.
pub fn auth_page_guard(session: &SessionState, role_param: Option<&str>) -> AuthPageGuard {
    if session.loading {
        return AuthPageGuard::Wait;
    }
    if let Some(user) = &session.user {
        return AuthPageGuard::Redirect(routes::dashboard_path(&user.role));
    }
    let Some(raw) = role_param else {
        return AuthPageGuard::AwaitRole;
    };
    match raw.parse::<Role>() {
        Ok(role) => AuthPageGuard::Show(role),
        Err(_) => AuthPageGuard::Redirect(routes::HOME.to_owned()),
    }
}

/// Transient form input owned by one page instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

impl RegisterForm {
    /// Check the form locally and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::Missing`] for an empty field and
    /// [`RegisterError::PasswordMismatch`] when the confirmation differs.
    pub fn validate(&self, role: Role) -> Result<RegisterRequest, RegisterError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(RegisterError::Missing("Full name"));
        }
        if email.is_empty() {
            return Err(RegisterError::Missing("Email"));
        }
        if self.password.is_empty() {
            return Err(RegisterError::Missing("Password"));
        }
        if self.password != self.confirm_password {
            return Err(RegisterError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            role,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RegisterPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    /// Editable again; carries the message shown to the user.
    Failed(String),
}

impl RegisterPhase {
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    /// Submit control label for this phase.
    pub fn button_label(&self) -> &'static str {
        if matches!(self, Self::Submitting) { "Creating Account..." } else { "Sign Up" }
    }
}

/// Navigation scheduled after a delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredRedirect {
    pub path: String,
    pub delay: Duration,
}

/// Informational toast shown alongside the success toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub icon: &'static str,
    pub duration: Duration,
}

/// Post-registration behavior for a role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessPlan {
    pub notice: Option<Notice>,
    pub redirect: DeferredRedirect,
}

/// Tutors get an approval notice and a slower hop to their login page;
/// students go straight to theirs.
pub fn success_plan(role: Role, config: &ClientConfig) -> SuccessPlan {
    if role.requires_approval() {
        SuccessPlan {
            notice: Some(Notice {
                message: AWAITING_APPROVAL,
                icon: AWAITING_APPROVAL_ICON,
                duration: config.approval_notice,
            }),
            redirect: DeferredRedirect { path: routes::login_path(role), delay: config.tutor_redirect_delay },
        }
    } else {
        SuccessPlan {
            notice: None,
            redirect: DeferredRedirect { path: routes::login_path(role), delay: config.student_redirect_delay },
        }
    }
}

/// Run one submission attempt.
///
/// `set_phase` is called with [`RegisterPhase::Submitting`] before the request
/// suspends, then with the final phase. A form rejected locally is put back to
/// [`RegisterPhase::Idle`]. Returns the navigation to schedule on success.
pub async fn submit_registration<A, N, P>(
    api: &A,
    notifier: &N,
    config: &ClientConfig,
    role: Role,
    form: &RegisterForm,
    set_phase: P,
) -> Option<DeferredRedirect>
where
    A: AccountApi,
    N: Notifier,
    P: Fn(RegisterPhase),
{
    let request = match form.validate(role) {
        Ok(request) => request,
        Err(e) => {
            notifier.error(None, &e.to_string());
            set_phase(RegisterPhase::Idle);
            return None;
        }
    };

    set_phase(RegisterPhase::Submitting);
    let toast = notifier.loading(CREATING_ACCOUNT);

    let failure = match api.register(&request).await {
        Ok(resp) if resp.success => None,
        Ok(resp) => Some(
            resp.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| REGISTRATION_FAILED.to_owned()),
        ),
        Err(e) => {
            log::warn!("registration request failed: {e}");
            Some(e.user_message().unwrap_or(REGISTRATION_FAILED).to_owned())
        }
    };

    if let Some(message) = failure {
        notifier.error(Some(toast), &message);
        set_phase(RegisterPhase::Failed(message));
        return None;
    }

    notifier.success(Some(toast), ACCOUNT_CREATED);
    let plan = success_plan(role, config);
    if let Some(notice) = plan.notice {
        notifier.info(notice.message, Some(notice.icon), notice.duration);
    }
    set_phase(RegisterPhase::Success);
    Some(plan.redirect)
}
