//! # journal
//!
//! Leptos + WASM frontend for the Journal site: navigation header, role-based
//! registration and login pages, and the browser-local session that ties them
//! together.
//!
//! `state` holds the session store and form workflows, `net` the account API
//! client, `pages` and `components` the views, and `util` browser glue
//! (durable storage, routes, deferred navigation).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
