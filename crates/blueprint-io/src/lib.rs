//! blueprint-io: Browser I/O and Dioxus component library.
//!
//! Wires platform drag/drop and file-picker events into the
//! `blueprint-intake` state machine, renders the drop-zone, shows toast
//! acknowledgments and writes to the browser console.

pub mod components;
pub mod console;
pub mod picked;
pub mod toast;

pub use components::{DropZone, ToastHost};
pub use picked::PickedFile;
pub use toast::{Toast, ToastId, ToastQueue, Toaster, use_toaster};
