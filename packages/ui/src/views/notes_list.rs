use api::NotesApi;
use dioxus::prelude::*;
use state::{ListView, Notice, NotesListState};

use crate::icons::FaPlus;
use crate::{authorized, use_auth, use_notes_api, AlertDialog, Icon, NoteCard, NoteFormFields};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared notes list view.
///
/// Fetches the signed-in user's notes once per mount and hosts the create form.
#[component]
pub fn NotesListView() -> Element {
    let mut state = use_signal(NotesListState::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let auth = use_auth();
    let api = use_notes_api();

    // Load notes on mount
    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            let result = authorized(auth, api, |api| async move { api.list_notes().await }).await;
            state.write().apply_fetch(result);
        }
    });

    let create_api = api.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let request = state.read().begin_create();
        let input = match request {
            Ok(input) => input,
            Err(rejected) => {
                notice.set(Some(rejected));
                return;
            }
        };
        let api = create_api.clone();
        spawn(async move {
            let result = authorized(auth, api, |api| {
                let input = input.clone();
                async move { api.create_note(&input).await }
            })
            .await;
            let outcome = state.write().apply_create(result);
            if let Err(failed) = outcome {
                notice.set(Some(failed));
            }
        });
    };

    let snapshot = state();

    if snapshot.loading {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "notes-container",
                div { class: "loading", "Loading notes..." }
            }
        };
    }

    let username = auth().session.map(|s| s.username).unwrap_or_default();

    let collection = match snapshot.view() {
        ListView::Grid(notes) => rsx! {
            div {
                class: "notes-grid",
                for note in notes.iter() {
                    NoteCard { key: "{note.id}", note: note.clone() }
                }
            }
        },
        _ => rsx! {
            div {
                class: "empty-state",
                h3 { "No notes yet" }
                p { "Create your first note to get started!" }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "notes-container",

            header {
                class: "notes-header",
                div {
                    class: "header-content",
                    h1 { "My Notes" }
                    div {
                        class: "header-actions",
                        span { class: "welcome-text", "Welcome, {username}" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| state.write().toggle_create_form(),
                            if snapshot.show_create_form {
                                "Cancel"
                            } else {
                                Icon { icon: FaPlus, width: 12, height: 12 }
                                " New Note"
                            }
                        }
                        Link { class: "btn btn-secondary", to: "/logout", "Logout" }
                    }
                }
            }

            if snapshot.show_create_form {
                div {
                    class: "create-note-form",
                    h3 { "Create New Note" }
                    form {
                        onsubmit: handle_create,
                        NoteFormFields {
                            form: snapshot.new_note.clone(),
                            rows: 4,
                            content_placeholder: "Write your note content here...",
                            on_title: move |value: String| state.write().new_note.set_title(&value),
                            on_content: move |value: String| state.write().new_note.set_content(&value),
                        }
                        div {
                            class: "form-actions",
                            button { r#type: "submit", class: "btn btn-primary", "Create Note" }
                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                onclick: move |_| state.write().hide_create_form(),
                                "Cancel"
                            }
                        }
                    }
                }
            }

            if let Some(message) = snapshot.error.clone() {
                div { class: "error-message", "{message}" }
            }

            {collection}

            if let Some(alert) = notice() {
                AlertDialog {
                    message: alert.message,
                    on_close: move |_| notice.set(None),
                }
            }
        }
    }
}
