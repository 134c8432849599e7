//! Authentication context and hooks for the UI.

use std::future::Future;

use api::{ApiError, ClientConfig, HttpNotesApi, Session};
use dioxus::prelude::*;
use state::SessionChange;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn username(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.username.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Record the outcome of an authenticated call. An expired session signs
    /// the user out, and the route guard then sends them to `/login`.
    pub fn apply(&mut self, change: SessionChange) {
        match change {
            SessionChange::Unchanged => {}
            SessionChange::Renewed(session) => self.session = Some(session),
            SessionChange::Expired => {
                if let Some(session) = self.session.take() {
                    tracing::warn!("Session for {} expired", session.username);
                }
            }
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Notes client authenticated as the current session.
///
/// Reads the auth signal, so the calling component re-renders with a fresh
/// client after sign-in or sign-out.
pub fn use_notes_api() -> HttpNotesApi {
    let auth = use_auth();
    let client = use_context::<HttpNotesApi>();
    let client = client.with_session(auth.read().session.as_ref());
    client
}

/// Run `call` with a client for the current session, renewing the access
/// token once if the server rejects it.
pub async fn authorized<T, Call, Fut>(
    mut auth: Signal<AuthState>,
    client: HttpNotesApi,
    call: Call,
) -> Result<T, ApiError>
where
    Call: Fn(HttpNotesApi) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let session = auth.peek().session.clone();
    let config = client.config().clone();
    let outcome = state::authorized(
        session,
        |session| call(client.with_session(session.as_ref())),
        move |session| async move { api::refresh_session(&config, &session).await },
    )
    .await;
    auth.write().apply(outcome.session);
    outcome.result
}

/// Provider component that owns the session and the API client.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    use_context_provider(|| auth_state);
    use_context_provider(|| {
        tracing::info!("Using notes API at {}", config.base_url);
        HttpNotesApi::new(config.clone())
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(access: &str) -> Session {
        Session {
            username: "alice".to_string(),
            access_token: access.to_string(),
            refresh_token: "refresh".to_string(),
        }
    }

    #[test]
    fn test_default_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_signed_in());
        assert_eq!(state.username(), None);
    }

    #[test]
    fn test_username_from_session() {
        let state = AuthState {
            session: Some(session("token")),
        };
        assert!(state.is_signed_in());
        assert_eq!(state.username(), Some("alice"));
    }

    #[test]
    fn test_expired_session_signs_out() {
        let mut state = AuthState {
            session: Some(session("stale")),
        };
        state.apply(SessionChange::Unchanged);
        assert!(state.is_signed_in());

        state.apply(SessionChange::Expired);
        assert!(!state.is_signed_in());
        assert_eq!(state, AuthState::default());
    }

    #[test]
    fn test_renewed_session_replaces_token() {
        let mut state = AuthState {
            session: Some(session("stale")),
        };
        state.apply(SessionChange::Renewed(session("fresh")));
        assert_eq!(
            state.session.map(|s| s.access_token),
            Some("fresh".to_string())
        );
    }
}
