use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card and blocks
/// the page underneath. Clicking outside the card triggers `on_close`, which
/// does nothing unless provided.
#[component]
pub fn ModalOverlay(#[props(default)] on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
