//! Blocking user-facing messages via `window.alert()`.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use crate::error::IoError;

/// Show `message` in a modal alert and block until it is dismissed.
///
/// # Errors
///
/// Returns [`IoError::JsError`] if there is no global window or the
/// browser refuses to show the dialog.
pub fn show(message: &str) -> Result<(), IoError> {
    let window = web_sys::window().ok_or_else(|| IoError::JsError("no global window".into()))?;
    window.alert_with_message(message)?;
    Ok(())
}
