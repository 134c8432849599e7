mod auth_guard;
pub use auth_guard::AuthGuard;

mod login;
pub use login::Login;

mod logout;
pub use logout::Logout;

mod register;
pub use register::Register;

mod notes;
pub use notes::Notes;

mod note_detail;
pub use note_detail::NoteDetail;

mod not_found;
pub use not_found::PageNotFound;
