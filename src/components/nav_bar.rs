//! Top navigation bar with session identity and logout.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::LOGIN_PATH;
use crate::state::session::SessionState;
use crate::util::session_storage;

/// Short identity line for the bar.
fn identity_label(session: &SessionState) -> String {
    match (&session.token, session.role) {
        (Some(_), Some(role)) => format!("signed in as {role}"),
        (Some(_), None) => "signed in".to_owned(),
        (None, _) => "guest".to_owned(),
    }
}

/// Navigation bar — shows who is signed in and offers logout, which
/// clears the stored session before returning to the login screen.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session_storage::clear_session();
        session.set(SessionState::from_stored(None, None));
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"Task Portal"</a>
            <div class="nav-bar__session">
                <span class="nav-bar__identity">{move || identity_label(&session.get())}</span>
                <Show when=move || session.get().is_authenticated()>
                    <button class="nav-bar__logout" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
