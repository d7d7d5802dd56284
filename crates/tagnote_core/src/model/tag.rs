//! Tag domain model.

use serde::{Deserialize, Serialize};

/// Stable identifier of a tag.
pub type TagId = String;

/// User-defined label attachable to any number of notes.
///
/// Serialized as `{"id": .., "label": ..}` in the tags slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Immutable once created.
    pub id: TagId,
    /// Display label, renamable in place.
    pub label: String,
}

impl Tag {
    pub fn new(id: impl Into<TagId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
