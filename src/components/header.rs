//! Site header with section links and the account area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session to choose between a greeting + logout and the
//! login/sign-up links, and reads the current path so the page you are on is
//! not linked again.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::register::Role;
use crate::state::session::{SessionState, use_session};
use crate::util::deferred::install_pending_redirect;
use crate::util::routes;

pub const SECTION_LINKS: [(&str, &str); 3] =
    [("Teaching", "/teaching"), ("Training", "/training"), ("Research", "/research")];

/// Account area contents for a session and the current path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountLinks {
    /// Rehydration has not finished; nothing user-dependent is shown.
    Hidden,
    SignedIn { greeting: String },
    SignedOut { show_login: bool, show_sign_up: bool },
}

pub fn account_links(session: &SessionState, path: &str) -> AccountLinks {
    if session.loading {
        return AccountLinks::Hidden;
    }
    match &session.user {
        Some(user) => AccountLinks::SignedIn { greeting: format!("Welcome, {}", user.name) },
        None => AccountLinks::SignedOut {
            show_login: !routes::is_login_path(path),
            show_sign_up: !routes::is_register_path(path),
        },
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let redirect = RwSignal::new(None::<String>);
    install_pending_redirect(redirect, use_navigate());

    let account = move || {
        let path = pathname.get();
        match session.state().with(|s| account_links(s, &path)) {
            AccountLinks::Hidden => ().into_any(),
            AccountLinks::SignedIn { greeting } => {
                let on_logout = move |_| redirect.set(Some(session.logout()));
                view! {
                    <div class="site-header__account">
                        <span class="site-header__greeting">{greeting}</span>
                        <button class="site-header__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                }
                .into_any()
            }
            AccountLinks::SignedOut { show_login, show_sign_up } => view! {
                <div class="site-header__account">
                    {show_login.then(|| view! {
                        <a class="site-header__link" href=routes::login_path(Role::Student)>"Login"</a>
                    })}
                    {show_sign_up.then(|| view! {
                        <a class="site-header__cta" href=routes::register_path(Role::Student)>"Sign Up"</a>
                    })}
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=routes::HOME>"Journal"</a>
            <nav class="site-header__nav">
                {SECTION_LINKS
                    .iter()
                    .map(|(label, href)| view! { <a class="site-header__link" href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            {account}
        </header>
    }
}
