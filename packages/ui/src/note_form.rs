use dioxus::prelude::*;
use state::{NoteForm, TITLE_MAX_CHARS};

/// Title input and content textarea bound to a [`NoteForm`].
///
/// Used by both the create and the edit form; the parent owns the form
/// value and the submit buttons.
#[component]
pub fn NoteFormFields(
    form: NoteForm,
    #[props(default = 4)] rows: u32,
    #[props(default = "Note title...".to_string())] title_placeholder: String,
    #[props(default = "Note content...".to_string())] content_placeholder: String,
    on_title: EventHandler<String>,
    on_content: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            input {
                r#type: "text",
                class: "form-input",
                maxlength: "{TITLE_MAX_CHARS}",
                placeholder: "{title_placeholder}",
                value: "{form.title}",
                oninput: move |evt: FormEvent| on_title.call(evt.value()),
            }
        }
        div {
            class: "form-group",
            textarea {
                class: "form-textarea",
                rows: "{rows}",
                placeholder: "{content_placeholder}",
                value: "{form.content}",
                oninput: move |evt: FormEvent| on_content.call(evt.value()),
            }
        }
    }
}
