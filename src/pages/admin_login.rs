//! Administrator login page.
//!
//! Speaks the same login endpoint as the regular page but refuses to store
//! a session for any account whose returned role is not `admin`.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;
#[cfg(any(test, feature = "hydrate"))]
use crate::routes::dashboard_path;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::Role;

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Accept only accounts carrying the admin tag.
#[cfg(any(test, feature = "hydrate"))]
fn admin_destination(role_tag: &str) -> Result<&'static str, &'static str> {
    match Role::parse(role_tag) {
        Some(Role::Admin) => Ok(dashboard_path(Role::Admin)),
        _ => Err("This account is not an administrator."),
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
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
                Ok(resp) => match admin_destination(&resp.role) {
                    Ok(destination) => {
                        crate::util::session_storage::store_session(&resp.token, Role::Admin);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(destination);
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
            <div class="login-card login-card--admin">
                <h1>"Task Portal"</h1>
                <p class="login-card__subtitle">"Administrator sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="admin@example.com"
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
                        "Sign In As Admin"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
