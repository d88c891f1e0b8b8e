//! Navigation driven from signals, including delayed navigation bound to a
//! component's lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! Event handlers and async tasks never hold the router's navigate closure.
//! They write the target into a signal and an installed `Effect` performs the
//! navigation. Post-submit redirects fire a few seconds after the response;
//! the page holds a [`LifetimeGuard`] and cancels it in `on_cleanup`, so a
//! redirect scheduled by a page that has since unmounted never runs.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::register::DeferredRedirect;

#[derive(Clone, Debug)]
pub struct LifetimeGuard {
    alive: Arc<AtomicBool>,
}

impl Default for LifetimeGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl LifetimeGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Run `f` if the owner is still mounted. Returns whether it ran.
    pub fn run_if_alive<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_alive() {
            f();
            true
        } else {
            false
        }
    }
}

/// Navigate to `path` after `delay` unless `guard` is cancelled first.
pub fn navigate_after<F>(guard: LifetimeGuard, delay: Duration, path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        if !guard.run_if_alive(|| navigate(&path, NavigateOptions::default())) {
            log::debug!("dropped deferred navigation to {path}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (guard, delay, path, navigate);
    }
}

/// Navigate whenever `pending` receives a path, then clear it.
pub fn install_pending_redirect<F>(pending: RwSignal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// Schedule each redirect written to `pending` with [`navigate_after`].
pub fn install_deferred_redirect<F>(pending: RwSignal<Option<DeferredRedirect>>, guard: LifetimeGuard, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(redirect) = pending.get() {
            pending.set(None);
            navigate_after(guard.clone(), redirect.delay, redirect.path, navigate.clone());
        }
    });
}
