//! Landing page with entry points for each role.

use leptos::prelude::*;

use crate::state::register::Role;
use crate::util::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Journal"</h1>
            <p class="home-page__lead">"Teaching, training, and research in one place."</p>
            <div class="home-page__roles">
                {[Role::Student, Role::Tutor]
                    .into_iter()
                    .map(|role| view! {
                        <section class="home-page__role">
                            <h2>{role.display_name()}</h2>
                            <a class="home-page__cta" href=routes::register_path(role)>"Sign Up"</a>
                            <a class="home-page__link" href=routes::login_path(role)>"Login"</a>
                        </section>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
