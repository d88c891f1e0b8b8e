//! Role dashboard (`/:role/dashboard`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Anonymous visitors are sent to the login
//! page for the requested role; signed-in users on someone else's role route
//! are sent to their own dashboard. Right after an explicit logout the guard
//! does not navigate, so the logout redirect is the only one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::User;
use crate::state::register::Role;
use crate::state::session::{SessionState, use_session};
use crate::util::routes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardGuard {
    Wait,
    Redirect(String),
    SignedOut,
    Show(User),
}

pub fn dashboard_guard(session: &SessionState, role_param: Option<&str>) -> DashboardGuard {
    if session.loading {
        return DashboardGuard::Wait;
    }
    let Some(role_param) = role_param else {
        return DashboardGuard::Wait;
    };
    match &session.user {
        None if session.logged_out => DashboardGuard::SignedOut,
        None => match role_param.parse::<Role>() {
            Ok(role) => DashboardGuard::Redirect(routes::login_path(role)),
            Err(_) => DashboardGuard::Redirect(routes::HOME.to_owned()),
        },
        Some(user) if user.role != role_param => DashboardGuard::Redirect(routes::dashboard_path(&user.role)),
        Some(user) => DashboardGuard::Show(user.clone()),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let navigate = use_navigate();

    let guard = Memo::new(move |_| {
        let role = params.read().get("role");
        session.state().with(|s| dashboard_guard(s, role.as_deref()))
    });

    Effect::new(move || {
        if let DashboardGuard::Redirect(path) = guard.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    view! {
        <div class="dashboard-page">
            {move || match guard.get() {
                DashboardGuard::Show(user) => view! {
                    <section class="dashboard-page__intro">
                        <h1 class="dashboard-page__title">{format!("Welcome, {}", user.name)}</h1>
                        <p class="dashboard-page__meta">
                            "Signed in as " <strong>{user.email}</strong> " (" {user.role} ")"
                        </p>
                    </section>
                }
                .into_any(),
                DashboardGuard::Wait => view! { <p>"Loading..."</p> }.into_any(),
                DashboardGuard::Redirect(_) => view! { <p>"Redirecting..."</p> }.into_any(),
                DashboardGuard::SignedOut => view! {
                    <p>
                        "You have signed out. "
                        <a href=routes::logout_redirect()>"Login again"</a>
                    </p>
                }
                .into_any(),
            }}
        </div>
    }
}
