//! # API crate: typed client for the notes REST backend
//!
//! Every frontend view talks to the backend through this crate. It owns the wire
//! models, the error taxonomy, and the client configuration.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`NotesApi`] trait, its `reqwest` implementation [`HttpNotesApi`], and the account calls [`obtain_token`], [`refresh_session`] and [`register`] |
//! | [`config`] | [`ClientConfig`]: API root from TOML, `NOTES_API_URL`, or the local default |
//! | [`error`] | [`ApiError`] and the HTTP status mapping |
//! | [`memory`] | [`MemoryNotesApi`], an in-process backend for tests |
//! | [`models`] | [`Note`], [`NoteInput`], [`Session`], [`TokenPair`], [`Registration`] |

pub mod client;
pub mod config;
pub mod error;
pub mod memory;
pub mod models;

pub use client::{obtain_token, refresh_session, register, HttpNotesApi, NotesApi};
pub use config::ClientConfig;
pub use error::ApiError;
pub use memory::MemoryNotesApi;
pub use models::{AccessToken, Note, NoteId, NoteInput, Registration, Session, TokenPair};
