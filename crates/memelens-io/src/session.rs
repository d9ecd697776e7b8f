//! Runs one upload cycle: preview encoding and classification as two
//! independent tasks reporting back to the widget.

use std::rc::Rc;

use dioxus::prelude::*;
use memelens_client::PredictClient;
use memelens_core::{Prediction, SelectedFile, Submission, data_uri};

use crate::error::IoError;
use crate::page;
use crate::view::BrowserWidget;

/// Hand `file` to the widget and, if accepted, start its preview and
/// classification tasks.
///
/// The tasks are not ordered relative to each other. Each reports to the
/// widget with the submission token, so results of superseded uploads
/// are dropped there.
///
/// Must be called from within a Dioxus event handler or task.
pub fn start_upload(mut widget: Signal<BrowserWidget>, file: SelectedFile) {
    let accepted = widget.write().accept(file);
    let Submission { token, file } = match accepted {
        Ok(submission) => submission,
        Err(e) => {
            log::debug!("upload not started: {e}");
            return;
        }
    };
    let file = Rc::new(file);
    let endpoint = widget.peek().config().endpoint.clone();

    let preview_file = Rc::clone(&file);
    spawn(async move {
        // Yield so the loading indicator paints before encoding large files.
        gloo_timers::future::TimeoutFuture::new(0).await;
        let uri = data_uri(&preview_file);
        widget.write().preview_ready(token, uri);
    });

    spawn(async move {
        let outcome = classify(&endpoint, &file).await;
        widget.write().submission_finished(token, outcome);
    });
}

/// Submit `file` to `endpoint`, resolved against the page origin.
#[allow(clippy::future_not_send)] // WASM is single-threaded; fetch futures are !Send
async fn classify(endpoint: &str, file: &SelectedFile) -> Result<Prediction, IoError> {
    let origin = page::origin()?;
    let client = PredictClient::with_base(&origin, endpoint)?;
    Ok(client.classify(file).await?)
}
