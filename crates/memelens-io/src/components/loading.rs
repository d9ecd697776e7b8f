//! Loading indicator shown while a classification is in flight.

use dioxus::prelude::*;

/// Spinner overlaid on the preview.
#[component]
pub fn LoadingIndicator(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div { id: "loadingSpinner", class: "loading-spinner",
            div { class: "spinner" }
            p { class: "loading-text", "Classifying..." }
        }
    }
}
