//! # Wire models for the notes REST API
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A note as returned by `GET /notes/` and `GET /notes/{id}/`. The `id`, `created_at` and `user` fields are assigned by the server. |
//! | [`NoteInput`] | The `{title, content}` body sent on create (`POST`) and update (`PUT`). |
//! | [`Session`] | The signed-in user's display name and token pair. |
//! | [`TokenPair`] | The `{access, refresh}` response of `POST /token/`. |
//! | [`Registration`] | The `{username, password, password2}` body of `POST /register/`. |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned note identifier.
pub type NoteId = i64;

/// A note owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// At most 200 characters; enforced by the server.
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Owner's username.
    pub user: String,
}

/// Request body for creating or fully replacing a note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

/// Authenticated user context attached to every notes request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub access_token: String,
    /// Exchanged at `POST /token/refresh/` once the access token expires.
    pub refresh_token: String,
}

impl Session {
    pub fn new(username: impl Into<String>, tokens: TokenPair) -> Self {
        Self {
            username: username.into(),
            access_token: tokens.access,
            refresh_token: tokens.refresh,
        }
    }

    /// Same user and refresh token, new access token.
    pub fn renewed(&self, access: AccessToken) -> Self {
        Self {
            access_token: access.access,
            ..self.clone()
        }
    }
}

/// JWT pair issued by the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Response of `POST /token/refresh/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub access: String,
}

/// New account request. The server rejects it when the passwords differ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub password2: String,
}

#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_from_server_json() {
        let json = r#"{
            "id": 7,
            "title": "Groceries",
            "content": "Eggs\nMilk",
            "created_at": "2024-03-05T14:30:00.123456Z",
            "user": "alice"
        }"#;

        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, 7);
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content, "Eggs\nMilk");
        assert_eq!(note.user, "alice");
        assert_eq!(note.created_at.to_rfc3339(), "2024-03-05T14:30:00.123456+00:00");
    }

    #[test]
    fn test_note_with_offset_timestamp() {
        let json = r#"{"id":1,"title":"t","content":"c","created_at":"2024-03-05T16:30:00+02:00","user":"bob"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.created_at.to_rfc3339(), "2024-03-05T14:30:00+00:00");
    }

    #[test]
    fn test_note_input_body_has_only_title_and_content() {
        let input = NoteInput {
            title: "Hi".to_string(),
            content: "Body".to_string(),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "Hi", "content": "Body" }));
    }

    #[test]
    fn test_session_keeps_refresh_token_on_renewal() {
        let tokens: TokenPair =
            serde_json::from_str(r#"{"access":"a1","refresh":"r1"}"#).unwrap();
        let session = Session::new("alice", tokens);
        assert_eq!(session.access_token, "a1");
        assert_eq!(session.refresh_token, "r1");

        let access: AccessToken = serde_json::from_str(r#"{"access":"a2"}"#).unwrap();
        let renewed = session.renewed(access);
        assert_eq!(renewed.username, "alice");
        assert_eq!(renewed.access_token, "a2");
        assert_eq!(renewed.refresh_token, "r1");
    }

    #[test]
    fn test_registration_body() {
        let body = Registration {
            username: "carol".to_string(),
            password: "s3cret-pass".to_string(),
            password2: "s3cret-pass".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "username": "carol",
                "password": "s3cret-pass",
                "password2": "s3cret-pass"
            })
        );
    }
}
