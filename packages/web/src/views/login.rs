//! Login page view with username/password form.

use api::{ApiError, HttpNotesApi};
use dioxus::prelude::*;
use ui::use_auth;

use crate::{landing_route, Route};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let client = use_context::<HttpNotesApi>();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the notes list. Also fires once sign-in
    // below stores the session.
    use_effect(move || {
        if let Some(route) = landing_route(&auth.read()) {
            nav.replace(route);
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let config = client.config().clone();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let p = password();
            if u.is_empty() || p.is_empty() {
                error.set(Some("Please enter your username and password".to_string()));
                return;
            }

            loading.set(true);
            match api::obtain_token(&config, &u, &p).await {
                Ok(session) => {
                    tracing::info!("Signed in as {}", session.username);
                    auth.write().session = Some(session);
                }
                Err(ApiError::Unauthorized) => {
                    loading.set(false);
                    error.set(Some("Invalid username or password".to_string()));
                }
                Err(e) => {
                    tracing::error!("Login failed: {e}");
                    loading.set(false);
                    error.set(Some("Could not reach the server".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",

            h1 { "My Notes" }
            p { class: "login-subtitle", "Sign in to continue" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "login-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Sign up" }
            }
        }
    }
}
