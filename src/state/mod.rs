//! Application state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `session` holds the signed-in user, `toast` the notification stack.
//! `register` and `login` are the form workflows; they are plain async
//! functions over the `AccountApi` and `Notifier` seams.

pub mod login;
pub mod register;
pub mod session;
pub mod toast;
