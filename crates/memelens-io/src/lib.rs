//! memelens-io: Browser I/O and Dioxus component library.
//!
//! Handles blocking alerts and page-origin lookup. Provides the
//! Dioxus-backed render target for the upload widget, the drop zone and
//! result components, and the task wiring that runs preview encoding and
//! classification side by side.

pub mod alert;
pub mod components;
pub mod error;
pub mod page;
pub mod session;
pub mod view;

pub use components::{DropZone, ImagePreview, LoadingIndicator, ResultBadge};
pub use error::IoError;
pub use session::start_upload;
pub use view::{BrowserView, BrowserWidget, use_browser_view};
