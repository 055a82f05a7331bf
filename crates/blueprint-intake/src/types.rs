//! Shared types for the intake state machine.

use serde::{Deserialize, Serialize};

/// Whether a pointer-borne drag is currently over the drop-zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DragState {
    /// Nothing is being dragged over the widget.
    #[default]
    Idle,
    /// A drag is hovering the widget.
    Hovering,
}

impl DragState {
    /// Returns `true` while a drag hovers the widget.
    #[must_use]
    pub const fn is_hovering(self) -> bool {
        matches!(self, Self::Hovering)
    }
}

/// A file reference the intake can hold.
///
/// The state machine only needs a name and a byte size. Implementors are
/// free to carry more (e.g. a platform handle to the file contents) so
/// the embedder receives the full reference on accept.
pub trait IntakeFile {
    /// File name as reported by the platform, without any path.
    fn name(&self) -> &str;

    /// File size in bytes.
    fn size(&self) -> u64;
}

/// Plain name/size file reference with no content handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AcceptedFile {
    /// File name.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
}

impl AcceptedFile {
    /// Create a new file reference.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl IntakeFile for AcceptedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_idle() {
        assert_eq!(DragState::default(), DragState::Idle);
        assert!(!DragState::Idle.is_hovering());
        assert!(DragState::Hovering.is_hovering());
    }

    #[test]
    fn accepted_file_exposes_name_and_size() {
        let file = AcceptedFile::new("plan.pdf", 2_097_152);
        assert_eq!(IntakeFile::name(&file), "plan.pdf");
        assert_eq!(IntakeFile::size(&file), 2_097_152);
    }
}
