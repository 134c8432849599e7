//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::{ModalOverlay, NoteDetailView, NotesListView};

mod auth;
pub use auth::{authorized, use_auth, use_notes_api, AuthProvider, AuthState};

mod dialogs;
pub use dialogs::{AlertDialog, ConfirmDialog};

mod note_card;
pub use note_card::NoteCard;

mod note_form;
pub use note_form::NoteFormFields;
