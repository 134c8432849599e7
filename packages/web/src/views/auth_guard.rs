use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

/// Layout for routes that need a session. Without one, redirect to `/login`.
#[component]
pub fn AuthGuard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth.read().is_signed_in() {
        tracing::debug!("No session, redirecting to login");
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
