//! # View state for the notes pages
//!
//! Plain structs holding what each page shows, with the transitions the pages
//! perform around their API calls. Nothing here depends on Dioxus, so every rule
//! is tested without a renderer.
//!
//! | Type | Page |
//! |------|------|
//! | [`NotesListState`] | `/`: note grid and the create form |
//! | [`NoteDetailState`] | `/notes/{id}`: display, edit form, delete confirmation |
//! | [`NoteForm`] | The `{title, content}` pair both forms edit |
//! | [`Notice`] | Message for a blocking alert |
//!
//! [`authorized`] wraps the API calls of both pages with access-token renewal.

pub mod detail;
pub mod form;
pub mod format;
pub mod list;
pub mod session;

pub use detail::{DetailView, NoteDetailState, CONFIRM_DELETE};
pub use form::{NoteForm, Notice, TITLE_MAX_CHARS};
pub use format::{long_date, paragraphs, preview, short_date, PREVIEW_CHARS};
pub use list::{ListView, NotesListState};
pub use session::{authorized, Authorized, SessionChange};
