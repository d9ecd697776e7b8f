//! Dioxus UI components for memelens.
//!
//! Provides the drop zone, image preview, loading indicator, and
//! result badge.

mod drop_zone;
mod loading;
mod preview;
mod result_badge;

pub use drop_zone::DropZone;
pub use loading::LoadingIndicator;
pub use preview::ImagePreview;
pub use result_badge::ResultBadge;
