//! Platform file handles as intake file references.

use std::fmt;

use blueprint_intake::IntakeFile;
use dioxus::html::FileData;

/// A file delivered by a drop or the file picker.
///
/// Name, size and MIME type are read once when the event arrives; the
/// platform handle is kept so the embedder can read the contents.
#[derive(Clone)]
pub struct PickedFile {
    name: String,
    size: u64,
    content_type: Option<String>,
    data: FileData,
}

impl PickedFile {
    /// MIME type reported by the platform, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Platform handle for reading the file contents.
    #[must_use]
    pub const fn data(&self) -> &FileData {
        &self.data
    }

    /// Convert an event payload, preserving order.
    #[must_use]
    pub fn from_payload(files: Vec<FileData>) -> Vec<Self> {
        files.into_iter().map(Self::from).collect()
    }
}

impl From<FileData> for PickedFile {
    fn from(data: FileData) -> Self {
        Self {
            name: data.name(),
            size: data.size(),
            content_type: data.content_type(),
            data,
        }
    }
}

impl IntakeFile for PickedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }
}

// `FileData` has no equality; compare the metadata the UI shows.
impl PartialEq for PickedFile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.size == other.size
            && self.content_type == other.content_type
    }
}

impl fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}
