//! Role-scoped email + password login page (`/login/:role`).

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::ClientConfig;
use crate::net::api::HttpAccountApi;
use crate::state::login::submit_login;
use crate::state::register::{AuthPageGuard, Role, auth_page_guard};
use crate::state::session::use_session;
use crate::state::toast::use_toasts;
use crate::util::deferred::install_pending_redirect;
use crate::util::routes;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let navigate = use_navigate();

    let guard = Memo::new(move |_| {
        let role = params.read().get("role");
        session.state().with(|s| auth_page_guard(s, role.as_deref()))
    });

    Effect::new(move || {
        if let AuthPageGuard::Redirect(path) = guard.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    view! {
        <div class="auth-page">
            {move || match guard.get() {
                AuthPageGuard::Show(role) => view! { <LoginCard role/> }.into_any(),
                AuthPageGuard::AwaitRole => view! { <p class="auth-page__pending">"Loading..."</p> }.into_any(),
                AuthPageGuard::Wait | AuthPageGuard::Redirect(_) => ().into_any(),
            }}
        </div>
    }
}

#[component]
fn LoginCard(role: Role) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let destination = RwSignal::new(None::<String>);
    install_pending_redirect(destination, navigate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let api = HttpAccountApi::new(&config);
            let dashboard = submit_login(&api, &toasts, &email_value, &password_value, role, |user, token| {
                session.login(user, &token);
            })
            .await;
            match dashboard {
                Some(path) => destination.set(Some(path)),
                None => busy.set(false),
            }
        });
    };

    view! {
        <div class="auth-card">
            <div class="auth-card__heading">
                <h2>"Welcome Back"</h2>
                <p class="auth-card__subtitle">
                    "Sign in as a " <span class="auth-card__role">{role.display_name()}</span>
                </p>
            </div>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Email Address"
                    <input
                        class="auth-form__input"
                        name="email"
                        type="email"
                        placeholder="name@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        name="password"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing In..." } else { "Login" }}
                </button>
            </form>
            <p class="auth-card__footer">
                "New here? "
                <a href=routes::register_path(role)>"Create an account"</a>
            </p>
        </div>
    }
}
