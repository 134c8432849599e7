use api::NoteId;
use dioxus::prelude::*;
use ui::NoteDetailView;

use crate::Route;

#[component]
pub fn NoteDetail(id: NoteId) -> Element {
    let nav = use_navigator();

    rsx! {
        NoteDetailView {
            id,
            on_navigate_notes: move |_| {
                nav.push(Route::Notes {});
            },
        }
    }
}
