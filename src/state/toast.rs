//! Toast notifications.
//!
//! DESIGN
//! ======
//! A loading toast is created once per async attempt and later resolved in
//! place (same id) into success or error, so the stack never shows a stale
//! spinner next to its outcome. Durations follow the usual toast defaults:
//! loading stays until resolved, success 2 s, error and info 4 s.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;
use uuid::Uuid;

pub const SUCCESS_DURATION: Duration = Duration::from_secs(2);
pub const ERROR_DURATION: Duration = Duration::from_secs(4);
pub const INFO_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Loading => "toast--loading",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub icon: Option<String>,
    /// `None` keeps the toast until it is resolved or dismissed.
    pub duration: Option<Duration>,
}

/// Visible toast stack, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Insert a toast, or replace the one with the same id in place.
    pub fn upsert(&mut self, toast: Toast) {
        match self.toasts.iter_mut().find(|t| t.id == toast.id) {
            Some(existing) => *existing = toast,
            None => self.toasts.push(toast),
        }
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Dismiss `id` only if it still shows `kind`. Timers use this so an
    /// expired success timer cannot remove a toast that was re-used since.
    pub fn expire(&mut self, id: ToastId, kind: ToastKind) {
        self.toasts.retain(|t| !(t.id == id && t.kind == kind));
    }
}

/// Notification sink used by async workflows.
pub trait Notifier {
    /// Show a spinner toast that stays until resolved.
    fn loading(&self, message: &str) -> ToastId;

    /// Show success, replacing `id` when given.
    fn success(&self, id: Option<ToastId>, message: &str);

    /// Show an error, replacing `id` when given.
    fn error(&self, id: Option<ToastId>, message: &str);

    /// One-off informational toast.
    fn info(&self, message: &str, icon: Option<&str>, duration: Duration);
}

fn build(id: Option<ToastId>, kind: ToastKind, message: &str, icon: Option<&str>, duration: Option<Duration>) -> Toast {
    Toast {
        id: id.unwrap_or_else(ToastId::new),
        kind,
        message: message.to_owned(),
        icon: icon.map(str::to_owned),
        duration,
    }
}

impl Notifier for RwSignal<ToastState> {
    fn loading(&self, message: &str) -> ToastId {
        let toast = build(None, ToastKind::Loading, message, None, None);
        let id = toast.id;
        self.update(|s| s.upsert(toast));
        id
    }

    fn success(&self, id: Option<ToastId>, message: &str) {
        let toast = build(id, ToastKind::Success, message, None, Some(SUCCESS_DURATION));
        self.update(|s| s.upsert(toast));
    }

    fn error(&self, id: Option<ToastId>, message: &str) {
        let toast = build(id, ToastKind::Error, message, None, Some(ERROR_DURATION));
        self.update(|s| s.upsert(toast));
    }

    fn info(&self, message: &str, icon: Option<&str>, duration: Duration) {
        let toast = build(None, ToastKind::Info, message, icon, Some(duration));
        self.update(|s| s.upsert(toast));
    }
}

/// Toast stack handle. Panics outside the app root.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}
