use api::{NoteId, NotesApi};
use dioxus::prelude::*;
use state::{long_date, paragraphs, DetailView, NoteDetailState, CONFIRM_DELETE};

use crate::icons::FaTrashCan;
use crate::{
    authorized, use_auth, use_notes_api, AlertDialog, ConfirmDialog, Icon, NoteFormFields,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared note detail view.
///
/// Loads, displays, edits, and deletes one note. The platform package provides
/// the navigation callback used after a successful delete.
#[component]
pub fn NoteDetailView(
    /// Server id from the route.
    id: NoteId,
    /// Called after a successful delete: navigate back to the notes list.
    on_navigate_notes: EventHandler<()>,
) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut state = use_signal(|| NoteDetailState::new(id));
    let auth = use_auth();
    let api = use_notes_api();

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let id = id_signal();
        let api = loader_api.clone();
        async move {
            state.write().load(id);
            let result = authorized(auth, api, |api| async move { api.get_note(id).await }).await;
            state.write().apply_fetch(result);
        }
    });

    let update_api = api.clone();
    let handle_update = move |evt: FormEvent| {
        evt.prevent_default();
        let request = state.read().begin_update();
        let (id, input) = match request {
            Ok(request) => request,
            Err(rejected) => {
                state.write().show_notice(rejected);
                return;
            }
        };
        let api = update_api.clone();
        spawn(async move {
            let result = authorized(auth, api, |api| {
                let input = input.clone();
                async move { api.update_note(id, &input).await }
            })
            .await;
            let outcome = state.write().apply_update(result);
            if let Err(failed) = outcome {
                state.write().show_notice(failed);
            }
        });
    };

    let delete_api = api.clone();
    let handle_confirm_delete = move |_: ()| {
        let pending = state.write().confirm_delete();
        let Some(id) = pending else {
            return;
        };
        let api = delete_api.clone();
        spawn(async move {
            let result = authorized(auth, api, |api| async move { api.delete_note(id).await }).await;
            let outcome = state.write().apply_delete(result);
            match outcome {
                Ok(()) => on_navigate_notes.call(()),
                Err(failed) => state.write().show_notice(failed),
            }
        });
    };

    let snapshot = state();

    let note = match snapshot.view() {
        DetailView::Loading => {
            return rsx! {
                document::Link { rel: "stylesheet", href: VIEWS_CSS }
                div {
                    class: "note-detail-container",
                    div { class: "loading", "Loading note..." }
                }
            };
        }
        DetailView::Missing { message } => {
            return rsx! {
                document::Link { rel: "stylesheet", href: VIEWS_CSS }
                div {
                    class: "note-detail-container",
                    div { class: "error-message", "{message}" }
                    Link { class: "btn btn-primary", to: "/", "Back to Notes" }
                }
            };
        }
        DetailView::Ready(note) => note.clone(),
    };

    let created = long_date(&note.created_at);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "note-detail-container",

            header {
                class: "note-detail-header",
                Link { class: "back-link", to: "/", "← Back to Notes" }
                div {
                    class: "note-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| state.write().toggle_editing(),
                        if snapshot.is_editing { "Cancel Edit" } else { "Edit" }
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| state.write().request_delete(),
                        Icon { icon: FaTrashCan, width: 12, height: 12 }
                        " Delete"
                    }
                }
            }

            if snapshot.is_editing {
                div {
                    class: "edit-note-form",
                    form {
                        onsubmit: handle_update,
                        NoteFormFields {
                            form: snapshot.edit_form.clone(),
                            rows: 10,
                            on_title: move |value: String| state.write().edit_form.set_title(&value),
                            on_content: move |value: String| state.write().edit_form.set_content(&value),
                        }
                        div {
                            class: "form-actions",
                            button { r#type: "submit", class: "btn btn-primary", "Save Changes" }
                            button {
                                r#type: "button",
                                class: "btn btn-secondary",
                                onclick: move |_| state.write().cancel_editing(),
                                "Cancel"
                            }
                        }
                    }
                }
            } else {
                div {
                    class: "note-content",
                    h1 { class: "note-title", "{note.title}" }
                    div {
                        class: "note-meta",
                        span { "Created: {created}" }
                        span { "By: {note.user}" }
                    }
                    div {
                        class: "note-body",
                        for (index, paragraph) in paragraphs(&note.content).into_iter().enumerate() {
                            p { key: "{index}", "{paragraph}" }
                        }
                    }
                }
            }

            if snapshot.confirming_delete {
                ConfirmDialog {
                    message: CONFIRM_DELETE,
                    confirm_label: "Delete",
                    on_confirm: handle_confirm_delete,
                    on_cancel: move |_| state.write().cancel_delete(),
                }
            }

            if let Some(alert) = snapshot.notice.clone() {
                AlertDialog {
                    message: alert.message,
                    on_close: move |_| state.write().dismiss_notice(),
                }
            }
        }
    }
}
