use dioxus::prelude::*;

use crate::ModalOverlay;

/// Blocking alert. Only the OK button closes it.
#[component]
pub fn AlertDialog(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            div {
                class: "dialog",
                role: "alertdialog",
                p { class: "dialog-message", "{message}" }
                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_close.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}

/// Yes/no question. Clicking outside counts as cancel.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "OK".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "dialog",
                role: "dialog",
                p { class: "dialog-message", "{message}" }
                div {
                    class: "dialog-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
