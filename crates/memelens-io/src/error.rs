//! Errors raised by browser I/O.

use memelens_client::SubmitError;
use wasm_bindgen::JsValue;

/// Errors that can occur when talking to the browser or the service.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The classification request failed.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl From<JsValue> for IoError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}
