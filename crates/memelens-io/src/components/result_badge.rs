//! Classification result badge.

use dioxus::prelude::*;
use memelens_core::Badge;

/// Props for the [`ResultBadge`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultBadgeProps {
    /// The badge to show. `None` hides the result.
    badge: Option<Badge>,
}

/// Renders the prediction label with its `political` or
/// `non-political` style.
#[component]
pub fn ResultBadge(props: ResultBadgeProps) -> Element {
    let Some(badge) = props.badge else {
        return rsx! {};
    };
    let class = badge.class_name();

    rsx! {
        div { id: "resultContainer", class: "result-container",
            p { class: "result-heading", "Prediction" }
            span { id: "resultBadge", class: "{class}", "{badge.text}" }
        }
    }
}
