use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::{ApiError, Note, NoteId, NoteInput, NotesApi};

/// Status returned by every call while the backend is switched to failing.
pub const UNAVAILABLE_STATUS: u16 = 503;

/// In-memory NotesApi for testing and offline demos.
///
/// Behaves like the REST backend: ids are assigned on create, listings are
/// newest first, and unknown ids are [`ApiError::NotFound`].
#[derive(Clone, Debug, Default)]
pub struct MemoryNotesApi {
    inner: Arc<Mutex<Backend>>,
}

#[derive(Debug, Default)]
struct Backend {
    /// Newest first.
    notes: Vec<Note>,
    last_id: NoteId,
    owner: String,
    failing: bool,
    requests: usize,
}

impl MemoryNotesApi {
    pub fn new() -> Self {
        Self::with_owner("demo")
    }

    pub fn with_owner(owner: impl Into<String>) -> Self {
        let api = Self::default();
        api.lock().owner = owner.into();
        api
    }

    /// Seed existing notes, given newest first.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let api = Self::new();
        {
            let mut backend = api.lock();
            backend.last_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
            backend.notes = notes;
        }
        api
    }

    /// Make every following call fail with [`UNAVAILABLE_STATUS`].
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    /// Number of calls received so far, failed ones included.
    pub fn request_count(&self) -> usize {
        self.lock().requests
    }

    pub fn stored_notes(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> Result<MutexGuard<'_, Backend>, ApiError> {
        let mut backend = self.lock();
        backend.requests += 1;
        if backend.failing {
            return Err(ApiError::Status(UNAVAILABLE_STATUS));
        }
        Ok(backend)
    }
}

impl Backend {
    fn find(&self, id: NoteId) -> Result<&Note, ApiError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .ok_or(ApiError::NotFound)
    }

    fn find_mut(&mut self, id: NoteId) -> Result<&mut Note, ApiError> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(ApiError::NotFound)
    }
}

impl NotesApi for MemoryNotesApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        Ok(self.begin()?.notes.clone())
    }

    async fn get_note(&self, id: NoteId) -> Result<Note, ApiError> {
        self.begin()?.find(id).cloned()
    }

    async fn create_note(&self, input: &NoteInput) -> Result<Note, ApiError> {
        let mut backend = self.begin()?;
        backend.last_id += 1;
        let note = Note {
            id: backend.last_id,
            title: input.title.clone(),
            content: input.content.clone(),
            created_at: Utc::now(),
            user: backend.owner.clone(),
        };
        backend.notes.insert(0, note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: NoteId, input: &NoteInput) -> Result<Note, ApiError> {
        let mut backend = self.begin()?;
        let note = backend.find_mut(id)?;
        note.title = input.title.clone();
        note.content = input.content.clone();
        Ok(note.clone())
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), ApiError> {
        let mut backend = self.begin()?;
        let before = backend.notes.len();
        backend.notes.retain(|n| n.id != id);
        if backend.notes.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> NoteInput {
        NoteInput {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_newest_first() {
        let api = MemoryNotesApi::with_owner("alice");
        assert!(api.list_notes().await.unwrap().is_empty());

        let first = api.create_note(&input("First", "One")).await.unwrap();
        let second = api.create_note(&input("Second", "Two")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.user, "alice");

        let notes = api.list_notes().await.unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "Second");
        assert_eq!(notes[1].title, "First");
    }

    #[tokio::test]
    async fn test_get_update_delete() {
        let api = MemoryNotesApi::new();
        let note = api.create_note(&input("Draft", "Body")).await.unwrap();

        let fetched = api.get_note(note.id).await.unwrap();
        assert_eq!(fetched, note);

        let updated = api.update_note(note.id, &input("Final", "New body")).await.unwrap();
        assert_eq!(updated.id, note.id);
        assert_eq!(updated.title, "Final");
        assert_eq!(updated.content, "New body");
        assert_eq!(updated.created_at, note.created_at);

        api.delete_note(note.id).await.unwrap();
        assert!(api.get_note(note.id).await.unwrap_err().is_not_found());
        assert!(api.delete_note(note.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_missing_note_is_not_found() {
        let api = MemoryNotesApi::new();
        assert!(api.get_note(7).await.unwrap_err().is_not_found());
        assert!(api
            .update_note(7, &input("a", "b"))
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_get_leaves_stored_note_untouched() {
        let api = MemoryNotesApi::new();
        let note = api.create_note(&input("Read", "Only")).await.unwrap();

        assert_eq!(api.get_note(note.id).await.unwrap(), note);
        assert_eq!(api.get_note(note.id).await.unwrap(), note);
        assert_eq!(api.stored_notes(), vec![note]);
        assert_eq!(api.request_count(), 3);
    }

    #[tokio::test]
    async fn test_seeded_ids_continue() {
        let seed = Note {
            id: 41,
            title: "Old".to_string(),
            content: "Kept".to_string(),
            created_at: Utc::now(),
            user: "demo".to_string(),
        };
        let api = MemoryNotesApi::with_notes(vec![seed]);
        let created = api.create_note(&input("New", "Fresh")).await.unwrap();
        assert_eq!(created.id, 42);
        assert_eq!(api.stored_notes().len(), 2);
    }

    #[tokio::test]
    async fn test_failing_backend_counts_requests() {
        let api = MemoryNotesApi::new();
        api.set_failing(true);

        let err = api.list_notes().await.unwrap_err();
        assert!(matches!(err, ApiError::Status(UNAVAILABLE_STATUS)));
        assert!(api.create_note(&input("a", "b")).await.is_err());
        assert_eq!(api.request_count(), 2);
        assert!(api.stored_notes().is_empty());

        api.set_failing(false);
        assert!(api.list_notes().await.is_ok());
        assert_eq!(api.request_count(), 3);
    }
}
