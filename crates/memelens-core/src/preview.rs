//! Local preview encoding.
//!
//! The preview is a `data:` URI built from the selected file's bytes so
//! the browser can show the image before (or without) any server reply.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::types::SelectedFile;

/// Encode `file` as a base64 `data:` URI, e.g. `data:image/png;base64,iVBO...`.
///
/// Uses the declared content type verbatim.
#[must_use]
pub fn data_uri(file: &SelectedFile) -> String {
    let payload = STANDARD.encode(file.bytes());
    format!("data:{};base64,{payload}", file.content_type())
}
