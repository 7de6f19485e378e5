//! Signup page creating an unapproved employee account.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::net::types::SignupRequest;

/// Validate and trim the signup form fields.
fn validate_signup_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    let password = password.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(SignupRequest::new(username.to_owned(), email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_DONE_MESSAGE: &str =
    "Account created. An administrator must approve it before you can sign in.";

#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }
        let request = match validate_signup_input(&username.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&request).await {
                Ok(()) => {
                    done.set(true);
                    info.set(SIGNUP_DONE_MESSAGE.to_owned());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
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
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                    <button class="login-button" type="submit" disabled=move || busy.get() || done.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__footer">
                    "Already approved? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
