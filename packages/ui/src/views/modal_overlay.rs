use dioxus::prelude::*;

/// A full-screen overlay that centers a titled modal card.
/// Clicking outside the card or on the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    title: String,
    /// `data-testid` of the card.
    #[props(default)]
    testid: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-dialog",
                "role": "dialog",
                "data-testid": "{testid}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h5 { class: "modal-title", "{title}" }
                    button {
                        r#type: "button",
                        class: "close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
