mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod notes_list;
pub use notes_list::NotesListView;

mod note_detail;
pub use note_detail::NoteDetailView;
