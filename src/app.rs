//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, session_provider::SessionProvider, toaster::Toaster};
use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, toasts, and the session, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_build_env());
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/journal.css"/>
        <Title text="Journal"/>

        <SessionProvider>
            <Router>
                <div class="app-shell">
                    <Header/>
                    <main class="app-shell__main">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=(StaticSegment("login"), ParamSegment("role")) view=LoginPage/>
                            <Route path=(StaticSegment("register"), ParamSegment("role")) view=RegisterPage/>
                            <Route path=(ParamSegment("role"), StaticSegment("dashboard")) view=DashboardPage/>
                        </Routes>
                    </main>
                </div>
                <Toaster/>
            </Router>
        </SessionProvider>
    }
}
