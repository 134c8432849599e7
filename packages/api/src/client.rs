//! # Notes API client
//!
//! [`NotesApi`] is the seam the views talk to: five async calls, one per REST
//! operation on the `/notes/` resource. [`HttpNotesApi`] is the production
//! implementation over `reqwest` (which targets both `fetch` on wasm and hyper
//! natively); [`crate::MemoryNotesApi`] backs tests.
//!
//! | Method | Request | Response |
//! |--------|---------|----------|
//! | [`list_notes`](NotesApi::list_notes) | `GET /notes/` | `[Note]` |
//! | [`get_note`](NotesApi::get_note) | `GET /notes/{id}/` | `Note` |
//! | [`create_note`](NotesApi::create_note) | `POST /notes/` | `Note` |
//! | [`update_note`](NotesApi::update_note) | `PUT /notes/{id}/` | `Note` |
//! | [`delete_note`](NotesApi::delete_note) | `DELETE /notes/{id}/` | empty |
//!
//! Every request carries `Authorization: Bearer <access>` when a [`Session`] is
//! attached. The client itself never retries; renewing an expired access token
//! through [`refresh_session`] is up to the caller.
//!
//! The account endpoints are free functions since they run without a session:
//! [`obtain_token`], [`refresh_session`] and [`register`].

use std::collections::BTreeMap;

use reqwest::{Method, RequestBuilder, Response, StatusCode};

use crate::error::{check_status, rejection_message};
use crate::models::{RefreshRequest, TokenRequest};
use crate::{
    AccessToken, ApiError, ClientConfig, Note, NoteId, NoteInput, Registration, Session,
    TokenPair,
};

/// Async access to the signed-in user's notes.
pub trait NotesApi {
    fn list_notes(&self) -> impl std::future::Future<Output = Result<Vec<Note>, ApiError>>;
    fn get_note(
        &self,
        id: NoteId,
    ) -> impl std::future::Future<Output = Result<Note, ApiError>>;
    fn create_note(
        &self,
        input: &NoteInput,
    ) -> impl std::future::Future<Output = Result<Note, ApiError>>;
    fn update_note(
        &self,
        id: NoteId,
        input: &NoteInput,
    ) -> impl std::future::Future<Output = Result<Note, ApiError>>;
    fn delete_note(&self, id: NoteId) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// REST client bound to one API root and, optionally, one session.
#[derive(Clone, Debug)]
pub struct HttpNotesApi {
    client: reqwest::Client,
    config: ClientConfig,
    access_token: Option<String>,
}

impl HttpNotesApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            access_token: None,
        }
    }

    /// A copy of this client that authenticates as `session` (or anonymously).
    pub fn with_session(&self, session: Option<&Session>) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
            access_token: session.map(|s| s.access_token.clone()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.config.url(path));
        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        check_status(response.status())?;
        Ok(response)
    }
}

fn note_path(id: NoteId) -> String {
    format!("/notes/{id}/")
}

impl NotesApi for HttpNotesApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        tracing::debug!("GET /notes/");
        let response = self.send(self.request(Method::GET, "/notes/")).await?;
        Ok(response.json().await?)
    }

    async fn get_note(&self, id: NoteId) -> Result<Note, ApiError> {
        let path = note_path(id);
        tracing::debug!("GET {path}");
        let response = self.send(self.request(Method::GET, &path)).await?;
        Ok(response.json().await?)
    }

    async fn create_note(&self, input: &NoteInput) -> Result<Note, ApiError> {
        tracing::debug!("POST /notes/");
        let response = self
            .send(self.request(Method::POST, "/notes/").json(input))
            .await?;
        Ok(response.json().await?)
    }

    async fn update_note(&self, id: NoteId, input: &NoteInput) -> Result<Note, ApiError> {
        let path = note_path(id);
        tracing::debug!("PUT {path}");
        let response = self
            .send(self.request(Method::PUT, &path).json(input))
            .await?;
        Ok(response.json().await?)
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), ApiError> {
        let path = note_path(id);
        tracing::debug!("DELETE {path}");
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}

/// Exchange credentials for a session via `POST /token/`.
///
/// Wrong credentials come back from the server as 401 and surface as
/// [`ApiError::Unauthorized`].
pub async fn obtain_token(
    config: &ClientConfig,
    username: &str,
    password: &str,
) -> Result<Session, ApiError> {
    tracing::debug!("POST /token/ for {username}");
    let response = token_request(&reqwest::Client::new(), config, username, password)
        .send()
        .await?;
    check_status(response.status())?;
    let tokens: TokenPair = response.json().await?;
    Ok(Session::new(username, tokens))
}

/// Trade the session's refresh token for a new access token via
/// `POST /token/refresh/`.
///
/// An expired or revoked refresh token is [`ApiError::Unauthorized`]; the user
/// has to sign in again.
pub async fn refresh_session(config: &ClientConfig, session: &Session) -> Result<Session, ApiError> {
    tracing::debug!("POST /token/refresh/ for {}", session.username);
    let response = refresh_request(&reqwest::Client::new(), config, session)
        .send()
        .await?;
    check_status(response.status())?;
    let access: AccessToken = response.json().await?;
    Ok(session.renewed(access))
}

/// Create an account via `POST /register/`. Does not sign in.
///
/// Validation failures (taken username, weak or mismatched passwords) come
/// back as 400 with per-field messages, surfaced as [`ApiError::Rejected`].
pub async fn register(config: &ClientConfig, registration: &Registration) -> Result<(), ApiError> {
    tracing::debug!("POST /register/ for {}", registration.username);
    let response = register_request(&reqwest::Client::new(), config, registration)
        .send()
        .await?;
    if response.status() == StatusCode::BAD_REQUEST {
        return Err(match response.json::<BTreeMap<String, Vec<String>>>().await {
            Ok(errors) if !errors.is_empty() => ApiError::Rejected(rejection_message(&errors)),
            _ => ApiError::Status(StatusCode::BAD_REQUEST.as_u16()),
        });
    }
    check_status(response.status())
}

fn token_request(
    client: &reqwest::Client,
    config: &ClientConfig,
    username: &str,
    password: &str,
) -> RequestBuilder {
    client
        .post(config.url("/token/"))
        .json(&TokenRequest { username, password })
}

fn refresh_request(
    client: &reqwest::Client,
    config: &ClientConfig,
    session: &Session,
) -> RequestBuilder {
    client
        .post(config.url("/token/refresh/"))
        .json(&RefreshRequest {
            refresh: &session.refresh_token,
        })
}

fn register_request(
    client: &reqwest::Client,
    config: &ClientConfig,
    registration: &Registration,
) -> RequestBuilder {
    client.post(config.url("/register/")).json(registration)
}
