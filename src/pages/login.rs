//! Login page exchanging email + password for a stored session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;
#[cfg(any(test, feature = "hydrate"))]
use crate::routes::dashboard_path;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::Role;

/// Validate and trim the login form fields.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Parse the role tag the server returned. Unknown tags are rejected
/// before anything is stored.
#[cfg(any(test, feature = "hydrate"))]
fn parse_login_role(role_tag: &str) -> Result<Role, &'static str> {
    Role::parse(role_tag).ok_or("Account has an unrecognized role. Contact an administrator.")
}

/// Login page — on success stores the session record and performs a full
/// navigation to the role's dashboard so the app rehydrates off storage.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&request).await {
                Ok(resp) => match parse_login_role(&resp.role) {
                    Ok(role) => {
                        crate::util::session_storage::store_session(&resp.token, role);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(dashboard_path(role));
                        }
                    }
                    Err(message) => {
                        info.set(message.to_owned());
                        busy.set(false);
                    }
                },
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Task Portal"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__footer">
                    "No account yet? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
