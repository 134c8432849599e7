use api::{ClientConfig, NoteId};
use dioxus::prelude::*;
use tracing::Level;

use ui::{AuthProvider, AuthState};
use views::{AuthGuard, Login, Logout, NoteDetail, Notes, PageNotFound, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/logout")]
    Logout {},
    #[layout(AuthGuard)]
        #[route("/")]
        Notes {},
        #[route("/notes/:id")]
        NoteDetail { id: NoteId },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialise logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config,
            Router::<Route> {}
        }
    }
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}; falling back to {}", api::config::DEFAULT_BASE_URL);
            ClientConfig::default()
        }
    }
}

/// Where the public account pages send a user who already has a session.
fn landing_route(auth: &AuthState) -> Option<Route> {
    auth.is_signed_in().then_some(Route::Notes {})
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use api::Session;

    use super::*;

    fn parse(path: &str) -> Option<Route> {
        Route::from_str(path).ok()
    }

    #[test]
    fn test_note_detail_parses_numeric_id() {
        assert_eq!(parse("/notes/7"), Some(Route::NoteDetail { id: 7 }));
        assert_eq!(Route::NoteDetail { id: 7 }.to_string(), "/notes/7");
    }

    #[test]
    fn test_non_numeric_note_id_is_not_found() {
        assert!(matches!(
            parse("/notes/abc"),
            Some(Route::PageNotFound { .. })
        ));
        assert!(matches!(
            parse("/elsewhere"),
            Some(Route::PageNotFound { .. })
        ));
    }

    #[test]
    fn test_top_level_paths() {
        assert_eq!(parse("/"), Some(Route::Notes {}));
        assert_eq!(parse("/login"), Some(Route::Login {}));
        assert_eq!(parse("/register"), Some(Route::Register {}));
        assert_eq!(parse("/logout"), Some(Route::Logout {}));
    }

    #[test]
    fn test_display_round_trips() {
        for route in [
            Route::Notes {},
            Route::NoteDetail { id: 42 },
            Route::Login {},
            Route::Register {},
            Route::Logout {},
        ] {
            assert_eq!(parse(&route.to_string()), Some(route));
        }
    }

    #[test]
    fn test_landing_route_only_when_signed_in() {
        assert_eq!(landing_route(&AuthState::default()), None);

        let signed_in = AuthState {
            session: Some(Session {
                username: "alice".to_string(),
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
            }),
        };
        assert_eq!(landing_route(&signed_in), Some(Route::Notes {}));
    }
}
