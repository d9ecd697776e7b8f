use dioxus::prelude::*;
use memelens_core::{UploadWidget, WidgetConfig};
use memelens_io::{
    BrowserWidget, DropZone, ImagePreview, LoadingIndicator, ResultBadge, use_browser_view,
};

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Fails only if another logger is already installed; keep that one.
    if let Err(e) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {e}");
    }
    dioxus::launch(app);
}

/// Widget configuration, with the endpoint overridable at build time
/// through `MEMELENS_ENDPOINT` (e.g. to target a service on another origin).
fn widget_config() -> WidgetConfig {
    let mut config = WidgetConfig::default();
    if let Some(endpoint) = option_env!("MEMELENS_ENDPOINT") {
        config.endpoint = endpoint.to_owned();
    }
    config
}

/// Root application component.
///
/// Owns the upload widget and its browser view, and wires the drop zone,
/// preview, loading indicator, and result badge to them.
fn app() -> Element {
    let view = use_browser_view();
    let widget: Signal<BrowserWidget> = use_signal(|| UploadWidget::new(widget_config(), view));

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { "memelens" }
                p { class: "subtitle", "Bengali political meme classifier" }
            }

            main { class: "card",
                DropZone {
                    prompt_visible: (view.prompt_visible)(),
                    widget,

                    ImagePreview { src: (view.preview)() }
                    LoadingIndicator { visible: (view.loading)() }
                }

                ResultBadge { badge: (view.badge)() }
            }
        }
    }
}
