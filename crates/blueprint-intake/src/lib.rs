//! blueprint-intake: Drop-zone intake state machine (sans-IO).
//!
//! Tracks whether a drag is hovering the drop-zone and which file (at
//! most one) has been accepted, and tells the embedder when a file is
//! accepted. Transitions are pure functions from `(state, event)` to a
//! new state, so everything here is testable without a browser.
//!
//! This crate has **no UI or browser dependencies**. Event wiring,
//! rendering and the toast acknowledgment live in `blueprint-io`.

pub mod config;
pub mod filter;
pub mod format;
pub mod machine;
pub mod types;

pub use config::IntakeConfig;
pub use filter::{AcceptFilter, AcceptToken, FilterError};
pub use format::format_megabytes;
pub use machine::{AcceptListener, FileIntake, IntakeEvent, IntakeState, Notifier, Step};
pub use types::{AcceptedFile, DragState, IntakeFile};
