use dioxus::prelude::*;
use ui::NotesListView;

#[component]
pub fn Notes() -> Element {
    rsx! {
        NotesListView {}
    }
}
