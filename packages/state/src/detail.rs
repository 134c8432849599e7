//! # Note detail state
//!
//! Local state of `/notes/{id}`: the fetched note, the edit form seeded from it,
//! and the pending delete confirmation. Same begin/apply protocol as
//! [`crate::NotesListState`]. A failed fetch is terminal for the page.

use api::{ApiError, Note, NoteId, NoteInput};

use crate::form::{NoteForm, Notice};

pub const NOTE_NOT_FOUND: &str = "Note not found";
pub const FETCH_NOTE_FAILED: &str = "Failed to fetch note";
pub const UPDATE_NOTE_FAILED: &str = "Failed to update note";
pub const DELETE_NOTE_FAILED: &str = "Failed to delete note";
pub const CONFIRM_DELETE: &str =
    "Are you sure you want to delete this note? This action cannot be undone.";

#[derive(Clone, Debug, PartialEq)]
pub struct NoteDetailState {
    pub id: NoteId,
    pub note: Option<Note>,
    pub loading: bool,
    pub error: Option<String>,
    pub is_editing: bool,
    pub edit_form: NoteForm,
    /// Delete confirmation is open.
    pub confirming_delete: bool,
    /// Open blocking alert.
    pub notice: Option<Notice>,
}

/// What the detail page shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailView<'a> {
    Loading,
    /// Error text plus a link back to the list.
    Missing { message: &'a str },
    Ready(&'a Note),
}

impl NoteDetailState {
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            note: None,
            loading: true,
            error: None,
            is_editing: false,
            edit_form: NoteForm::default(),
            confirming_delete: false,
            notice: None,
        }
    }

    /// Start over for `id`, as when the route parameter changes.
    pub fn load(&mut self, id: NoteId) {
        *self = Self::new(id);
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn apply_fetch(&mut self, result: Result<Note, ApiError>) {
        match result {
            Ok(note) => {
                self.edit_form = NoteForm::from_note(&note);
                self.note = Some(note);
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching note {}: {e}", self.id);
                let message = if e.is_not_found() {
                    NOTE_NOT_FOUND
                } else {
                    FETCH_NOTE_FAILED
                };
                self.error = Some(message.to_string());
            }
        }
        self.loading = false;
    }

    pub fn toggle_editing(&mut self) {
        self.is_editing = !self.is_editing;
    }

    /// Leave edit mode; whatever was typed stays in the form.
    pub fn cancel_editing(&mut self) {
        self.is_editing = false;
    }

    /// Body for `PUT /notes/{id}/`, or the alert when a field is blank.
    pub fn begin_update(&self) -> Result<(NoteId, NoteInput), Notice> {
        Ok((self.id, self.edit_form.to_input()?))
    }

    pub fn apply_update(&mut self, result: Result<Note, ApiError>) -> Result<(), Notice> {
        match result {
            Ok(note) => {
                tracing::info!("Updated note {}", note.id);
                self.note = Some(note);
                self.is_editing = false;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error updating note {}: {e}", self.id);
                Err(Notice::new(UPDATE_NOTE_FAILED))
            }
        }
    }

    pub fn request_delete(&mut self) {
        self.confirming_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
    }

    /// Close the confirmation and return the id to delete, if one was pending.
    pub fn confirm_delete(&mut self) -> Option<NoteId> {
        if !self.confirming_delete {
            return None;
        }
        self.confirming_delete = false;
        Some(self.id)
    }

    /// `Ok` means the note is gone and the caller should leave the page.
    pub fn apply_delete(&mut self, result: Result<(), ApiError>) -> Result<(), Notice> {
        match result {
            Ok(()) => {
                tracing::info!("Deleted note {}", self.id);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error deleting note {}: {e}", self.id);
                Err(Notice::new(DELETE_NOTE_FAILED))
            }
        }
    }

    pub fn view(&self) -> DetailView<'_> {
        if self.loading {
            return DetailView::Loading;
        }
        match (&self.note, &self.error) {
            (Some(note), None) => DetailView::Ready(note),
            (_, Some(message)) => DetailView::Missing { message },
            (None, None) => DetailView::Missing {
                message: NOTE_NOT_FOUND,
            },
        }
    }
}
