//! Role-scoped account registration page (`/register/:role`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The page resolves the route role and the session into an
//! [`AuthPageGuard`]; only a `Show` outcome mounts the form. The form card
//! owns its inputs and the lifetime of any post-success redirect.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::ClientConfig;
use crate::net::api::HttpAccountApi;
use crate::state::register::{
    AuthPageGuard, DeferredRedirect, RegisterForm, RegisterPhase, Role, auth_page_guard, submit_registration,
};
use crate::state::session::use_session;
use crate::state::toast::use_toasts;
use crate::util::deferred::{LifetimeGuard, install_deferred_redirect};
use crate::util::routes;

#[component]
pub fn RegisterPage() -> impl IntoView {
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
                AuthPageGuard::Show(role) => view! { <RegisterCard role/> }.into_any(),
                AuthPageGuard::AwaitRole => view! { <p class="auth-page__pending">"Loading..."</p> }.into_any(),
                AuthPageGuard::Wait | AuthPageGuard::Redirect(_) => ().into_any(),
            }}
        </div>
    }
}

#[component]
fn RegisterCard(role: Role) -> impl IntoView {
    let toasts = use_toasts();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let phase = RwSignal::new(RegisterPhase::Idle);

    let scheduled = RwSignal::new(None::<DeferredRedirect>);
    let lifetime = LifetimeGuard::new();
    install_deferred_redirect(scheduled, lifetime.clone(), navigate);
    on_cleanup(move || lifetime.cancel());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !phase.get_untracked().can_submit() {
            return;
        }
        let form = RegisterForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        phase.set(RegisterPhase::Submitting);
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let api = HttpAccountApi::new(&config);
            let redirect = submit_registration(&api, &toasts, &config, role, &form, |p| phase.set(p)).await;
            if redirect.is_some() {
                scheduled.set(redirect);
            }
        });
    };

    let busy = move || !phase.get().can_submit();

    view! {
        <div class="auth-card">
            <div class="auth-card__heading">
                <h2>"Create Account"</h2>
                <p class="auth-card__subtitle">
                    "Join as a " <span class="auth-card__role">{role.display_name()}</span>
                </p>
            </div>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label">
                    "Full Name"
                    <input
                        class="auth-form__input"
                        name="name"
                        type="text"
                        placeholder="John Doe"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                <label class="auth-form__label">
                    "Confirm Password"
                    <input
                        class="auth-form__input"
                        name="confirmPassword"
                        type="password"
                        required
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                </label>
                <button class="auth-form__submit" type="submit" disabled=busy>
                    {move || phase.get().button_label()}
                </button>
            </form>
            <p class="auth-card__footer">
                "Already have an account? "
                <a href=routes::login_path(role)>"Login here"</a>
            </p>
        </div>
    }
}
