//! Lookups against the current page.

use crate::error::IoError;

/// The page origin, e.g. `http://localhost:8080`.
///
/// Relative classification endpoints resolve against this.
///
/// # Errors
///
/// Returns [`IoError::JsError`] if there is no global window or the
/// location cannot be read.
pub fn origin() -> Result<String, IoError> {
    let window = web_sys::window().ok_or_else(|| IoError::JsError("no global window".into()))?;
    Ok(window.location().origin()?)
}
