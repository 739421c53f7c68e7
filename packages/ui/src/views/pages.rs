use dioxus::prelude::*;

#[component]
pub fn LoadingPage() -> Element {
    rsx! {
        div {
            id: "loading",
            class: "loading-page",
            "Loading..."
        }
    }
}

/// Shows a failure message verbatim.
#[component]
pub fn ErrorPage(error: String) -> Element {
    rsx! {
        div {
            class: "error-page",
            div { "data-testid": "error-message", "{error}" }
        }
    }
}
