//! Dioxus UI components for blueprint.
//!
//! Provides the drop-zone and the toast host that renders its
//! acknowledgments.

mod drop_zone;
mod toast_host;

pub use drop_zone::DropZone;
pub use toast_host::ToastHost;
