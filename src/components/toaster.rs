//! Toast stack overlay.

use leptos::prelude::*;

use crate::state::toast::{Toast, use_toasts};

/// Renders every toast in the shared stack.
///
/// Items are keyed by id and kind, so resolving a loading toast remounts it
/// and starts the timer for its new duration.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| (toast.id, toast.kind)
                children=move |toast: Toast| view! { <ToastItem toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toasts();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    if let Some(duration) = toast.duration {
        let kind = toast.kind;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            let _ = toasts.try_update(|s| s.expire(id, kind));
        });
    }

    let class = format!("toast {}", toast.kind.css_modifier());
    view! {
        <div class=class role="status">
            {toast.icon.map(|icon| view! { <span class="toast__icon">{icon}</span> })}
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" aria-label="Dismiss" on:click=move |_| toasts.update(|s| s.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
