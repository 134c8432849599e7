use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Drops the session and returns to the login page.
#[component]
pub fn Logout() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if let Some(session) = auth.write().session.take() {
            tracing::info!("Signed out {}", session.username);
        }
        nav.replace(Route::Login {});
    });

    rsx! {
        div { class: "loading", "Signing out..." }
    }
}
