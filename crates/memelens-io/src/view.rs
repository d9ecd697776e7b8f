//! Dioxus-backed render target for the upload widget.
//!
//! [`BrowserView`] holds one signal per visible element. The widget
//! writes through [`RenderTarget`]; components read the signals.

use dioxus::prelude::*;
use memelens_core::{Badge, RenderTarget, UploadWidget};

use crate::alert;

/// The widget type driven by the web app.
pub type BrowserWidget = UploadWidget<BrowserView>;

/// Signals for the prompt, preview, loading indicator, and result badge.
#[derive(Clone, Copy, PartialEq)]
pub struct BrowserView {
    pub prompt_visible: Signal<bool>,
    pub preview: Signal<Option<String>>,
    pub loading: Signal<bool>,
    pub badge: Signal<Option<Badge>>,
}

/// Create a [`BrowserView`] in the idle state for the current component.
pub fn use_browser_view() -> BrowserView {
    BrowserView {
        prompt_visible: use_signal(|| true),
        preview: use_signal(|| None),
        loading: use_signal(|| false),
        badge: use_signal(|| None),
    }
}

/// Write `value` only if it differs, so unchanged elements do not re-render.
fn set_if_changed<T: PartialEq + 'static>(signal: &mut Signal<T>, value: T) {
    if *signal.peek() != value {
        signal.set(value);
    }
}

impl RenderTarget for BrowserView {
    fn set_prompt_visible(&mut self, visible: bool) {
        set_if_changed(&mut self.prompt_visible, visible);
    }

    fn set_preview(&mut self, data_uri: Option<String>) {
        set_if_changed(&mut self.preview, data_uri);
    }

    fn set_loading(&mut self, visible: bool) {
        set_if_changed(&mut self.loading, visible);
    }

    fn set_badge(&mut self, badge: Option<Badge>) {
        set_if_changed(&mut self.badge, badge);
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = alert::show(message) {
            log::error!("could not show alert {message:?}: {e}");
        }
    }
}
