//! # Notes list state
//!
//! Local state of the list page. The view drives it in three steps per action:
//! ask the state for the request (`begin_*`), perform the call, hand the result
//! back (`apply_*`). Rejected or failed mutations come back as a [`Notice`] and
//! leave the state exactly as it was.

use api::{ApiError, Note, NoteInput};

use crate::form::{NoteForm, Notice};

pub const FETCH_NOTES_FAILED: &str = "Failed to fetch notes";
pub const CREATE_NOTE_FAILED: &str = "Failed to create note";

#[derive(Clone, Debug, PartialEq)]
pub struct NotesListState {
    /// Server order, newly created notes in front.
    pub notes: Vec<Note>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_create_form: bool,
    pub new_note: NoteForm,
}

/// What the list page shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Grid(&'a [Note]),
}

impl Default for NotesListState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            loading: true,
            error: None,
            show_create_form: false,
            new_note: NoteForm::default(),
        }
    }
}

impl NotesListState {
    /// Fresh state for a mount; loading until the first fetch lands.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<Note>, ApiError>) {
        match result {
            Ok(notes) => {
                self.notes = notes;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching notes: {e}");
                self.error = Some(FETCH_NOTES_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    pub fn toggle_create_form(&mut self) {
        self.show_create_form = !self.show_create_form;
    }

    pub fn hide_create_form(&mut self) {
        self.show_create_form = false;
    }

    /// Body for `POST /notes/`, or the alert when a field is blank.
    pub fn begin_create(&self) -> Result<NoteInput, Notice> {
        self.new_note.to_input()
    }

    pub fn apply_create(&mut self, result: Result<Note, ApiError>) -> Result<(), Notice> {
        match result {
            Ok(note) => {
                tracing::info!("Created note {}", note.id);
                self.notes.insert(0, note);
                self.new_note.clear();
                self.show_create_form = false;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error creating note: {e}");
                Err(Notice::new(CREATE_NOTE_FAILED))
            }
        }
    }

    pub fn view(&self) -> ListView<'_> {
        if self.loading {
            ListView::Loading
        } else if self.notes.is_empty() {
            ListView::Empty
        } else {
            ListView::Grid(&self.notes)
        }
    }
}
