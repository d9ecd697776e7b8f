//! Drop zone with drag-and-drop and a click-to-open file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use memelens_core::SelectedFile;

use crate::session::start_upload;
use crate::view::BrowserWidget;

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Show the "drop an image here" prompt.
    prompt_visible: bool,
    /// Widget that screens and receives the chosen file.
    widget: Signal<BrowserWidget>,
    /// Rendered inside the zone, below the prompt (preview, indicator).
    children: Element,
}

/// CSS classes for the zone: `drop-zone`, plus `dragover` while a drag
/// hovers and `disabled` when input is refused.
fn zone_class(dragging: bool, disabled: bool) -> String {
    let mut class = String::from("drop-zone");
    if dragging && !disabled {
        class.push_str(" dragover");
    }
    if disabled {
        class.push_str(" disabled");
    }
    class
}

/// A drag-and-drop surface that also opens the file picker on click.
///
/// Only the first file of a drop or selection is used. Its declared
/// content type is screened by the widget before any bytes are read, so
/// a refused file is never loaded. The zone renders disabled while the
/// widget's overlap policy refuses new files.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut read_error = use_signal(|| Option::<String>::None);
    let mut widget = props.widget;
    let disabled = !widget.read().accepts_new_files();

    // Screen, read, and start uploading the first file from a list.
    // Shared by the file-picker and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        if disabled {
            return;
        }
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        let content_type = file.content_type().unwrap_or_default();
        if let Err(e) = widget.write().screen(&name, &content_type) {
            log::debug!("not reading {name}: {e}");
            return;
        }
        match file.read_bytes().await {
            Ok(bytes) => {
                read_error.set(None);
                start_upload(widget, SelectedFile::new(name, content_type, bytes.to_vec()));
            }
            Err(e) => {
                log::warn!("failed to read {name}: {e}");
                read_error.set(Some(format!("Failed to read file: {e}")));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let class = zone_class(dragging(), disabled);

    rsx! {
        label {
            id: "dropZone",
            class: "{class}",
            ondragenter: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            input {
                id: "fileInput",
                r#type: "file",
                accept: "image/*",
                class: "hidden",
                disabled,
                onchange: handle_files,
            }

            if props.prompt_visible {
                div { id: "uploadPrompt", class: "upload-prompt",
                    p { class: "prompt-title", "Drop a meme here" }
                    p { class: "prompt-hint", "or click to choose an image (JPG, PNG)" }
                }
            }

            {props.children}

            if let Some(ref err) = read_error() {
                p { class: "read-error", "{err}" }
            }
        }
    }
}
