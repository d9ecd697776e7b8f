//! Local image preview.

use dioxus::prelude::*;

/// Props for the [`ImagePreview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImagePreviewProps {
    /// `data:` URI of the selected file. `None` hides the preview.
    src: Option<String>,
}

/// Shows the selected image before any server reply arrives.
#[component]
pub fn ImagePreview(props: ImagePreviewProps) -> Element {
    let Some(src) = props.src else {
        return rsx! {};
    };

    rsx! {
        div { id: "previewContainer", class: "preview-container",
            img {
                id: "imagePreview",
                class: "image-preview",
                src: "{src}",
                alt: "Selected image",
            }
        }
    }
}
