//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome around the routed pages while reading shared
//! state from Leptos context providers.

pub mod header;
pub mod session_provider;
pub mod toaster;
