//! memelens-core: Upload widget logic (sans-IO).
//!
//! Models the image upload widget as a small state machine that renders
//! into an injected [`RenderTarget`]. File selection, preview encoding,
//! and result rendering all live here; reading files, talking to the
//! classification service, and touching the DOM live in `memelens-io`
//! and `memelens-client`.

pub mod config;
pub mod preview;
pub mod types;
pub mod widget;

pub use config::{OverlapPolicy, WidgetConfig};
pub use preview::data_uri;
pub use types::{Badge, BadgeStyle, Prediction, SelectedFile, WidgetError};
pub use widget::{RenderTarget, Submission, Token, UploadWidget, VisualState};
