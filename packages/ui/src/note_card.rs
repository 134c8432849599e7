use api::Note;
use dioxus::prelude::*;
use state::{preview, short_date};

/// Grid card linking to `/notes/{id}`.
#[component]
pub fn NoteCard(note: Note) -> Element {
    let summary = preview(&note.content);
    let created = short_date(&note.created_at);

    rsx! {
        div {
            class: "note-card",
            Link {
                class: "note-link",
                to: format!("/notes/{}", note.id),
                h3 { class: "note-title", "{note.title}" }
                p { class: "note-preview", "{summary}" }
                div {
                    class: "note-meta",
                    span { class: "note-date", "{created}" }
                }
            }
        }
    }
}
