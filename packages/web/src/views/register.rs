//! Registration page view with username/password form.

use api::{ApiError, HttpNotesApi, Registration};
use dioxus::prelude::*;
use ui::use_auth;

use crate::{landing_route, Route};

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let client = use_context::<HttpNotesApi>();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password2 = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the notes list
    use_effect(move || {
        if let Some(route) = landing_route(&auth.read()) {
            nav.replace(route);
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let config = client.config().clone();
        spawn(async move {
            error.set(None);

            let registration = match validate(&username(), &password(), &password2()) {
                Ok(registration) => registration,
                Err(message) => {
                    error.set(Some(message.to_string()));
                    return;
                }
            };

            loading.set(true);
            match api::register(&config, &registration).await {
                Ok(()) => {
                    tracing::info!("Registered {}", registration.username);
                    nav.push(Route::Login {});
                }
                Err(ApiError::Rejected(message)) => {
                    loading.set(false);
                    error.set(Some(message));
                }
                Err(e) => {
                    tracing::error!("Registration failed: {e}");
                    loading.set(false);
                    error.set(Some("Could not reach the server".to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",

            h1 { "Create Account" }
            p { class: "login-subtitle", "Sign up for My Notes" }

            form {
                class: "login-form",
                onsubmit: handle_register,

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

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: password2(),
                    oninput: move |evt: FormEvent| password2.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "login-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}

/// Client-side checks before `POST /register/`. Password strength is left to
/// the server's validators.
fn validate(username: &str, password: &str, password2: &str) -> Result<Registration, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() || password2.is_empty() {
        return Err("Please fill in all fields");
    }
    if password != password2 {
        return Err("Password fields didn't match.");
    }
    Ok(Registration {
        username: username.to_string(),
        password: password.to_string(),
        password2: password2.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_username() {
        let registration = validate("  carol ", "long-enough", "long-enough").unwrap();
        assert_eq!(registration.username, "carol");
        assert_eq!(registration.password, "long-enough");
        assert_eq!(registration.password2, "long-enough");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert_eq!(validate("   ", "pw", "pw"), Err("Please fill in all fields"));
        assert_eq!(validate("carol", "", ""), Err("Please fill in all fields"));
        assert_eq!(validate("carol", "pw", ""), Err("Please fill in all fields"));
    }

    #[test]
    fn test_validate_rejects_mismatched_passwords() {
        assert_eq!(
            validate("carol", "first-pass", "other-pass"),
            Err("Password fields didn't match.")
        );
    }
}
