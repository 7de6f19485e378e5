//! Public landing page.
//!
//! Doubles as the role-mismatch redirect target, so it renders for any
//! session: signed-out visitors get the sign-in links, signed-in users get
//! a shortcut to their own dashboard.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::routes::dashboard_path;
use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let own_dashboard = move || session.get().role.map(dashboard_path);

    view! {
        <NavBar/>
        <main class="home-page">
            <h1>"Task Portal"</h1>
            <p>"Track tasks across admin, manager and employee desks."</p>
            <Show
                when=move || own_dashboard().is_some()
                fallback=|| {
                    view! {
                        <div class="home-page__links">
                            <a class="home-link" href="/login">"Sign in"</a>
                            <a class="home-link" href="/signup">"Sign up"</a>
                            <a class="home-link home-link--muted" href="/adminlogin">
                                "Administrator sign in"
                            </a>
                        </div>
                    }
                }
            >
                <a class="home-link" href=move || own_dashboard().unwrap_or("/")>
                    "Go to your dashboard"
                </a>
            </Show>
        </main>
    }
}
