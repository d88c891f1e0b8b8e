//! Session context provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once above the router. It provides the [`SessionContext`] and runs
//! rehydration from `localStorage` on the client. Children render right away;
//! anything user-dependent checks `loading` first (the header hides its
//! account area, page guards wait).

use leptos::prelude::*;

use crate::state::session::SessionContext;

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    // Effects only run in the browser, which is where the durable copy lives.
    Effect::new(move || session.rehydrate());

    children()
}
