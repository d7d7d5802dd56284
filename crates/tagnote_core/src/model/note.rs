//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted `RawNote` and its editable payload `RawNoteData`.
//! - Define the derived, read-only `Note` with resolved tags.
//!
//! # Invariants
//! - `RawNote.tag_ids` may transiently contain ids with no matching tag;
//!   derivation drops them instead of failing.
//! - Duplicate ids in `tag_ids` carry no extra meaning.

use crate::model::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};

/// Stable identifier of a note.
pub type NoteId = String;

/// Editable part of a persisted note, as passed to create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNoteData {
    pub title: String,
    /// Markdown source, stored verbatim.
    pub markdown: String,
    pub tag_ids: Vec<TagId>,
}

impl RawNoteData {
    pub fn new(title: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            markdown: markdown.into(),
            tag_ids: Vec::new(),
        }
    }

    /// Appends one tag reference.
    pub fn with_tag(mut self, tag_id: impl Into<TagId>) -> Self {
        self.tag_ids.push(tag_id.into());
        self
    }

    pub fn references(&self, tag_id: &str) -> bool {
        self.tag_ids.iter().any(|id| id == tag_id)
    }
}

/// Persisted note shape: `{"id", "title", "markdown", "tagIds"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNote {
    pub id: NoteId,
    #[serde(flatten)]
    pub data: RawNoteData,
}

impl RawNote {
    pub fn new(id: impl Into<NoteId>, data: RawNoteData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Form payload carrying full tag objects instead of ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteData {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl From<NoteData> for RawNoteData {
    /// Keeps title and markdown and maps the submitted tags to their ids.
    fn from(value: NoteData) -> Self {
        Self {
            title: value.title,
            markdown: value.markdown,
            tag_ids: value.tags.into_iter().map(|tag| tag.id).collect(),
        }
    }
}

/// Derived note with tag ids resolved to tags. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl Note {
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|tag| tag.id == tag_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteData, RawNote, RawNoteData};
    use crate::model::tag::Tag;
    use serde_json::json;

    #[test]
    fn raw_note_serializes_with_flat_camel_case_fields() {
        let note = RawNote::new("n1", RawNoteData::new("Plan Q1", "").with_tag("t1"));
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            json!({"id": "n1", "title": "Plan Q1", "markdown": "", "tagIds": ["t1"]})
        );
    }

    #[test]
    fn note_data_maps_submitted_tags_to_ids() {
        let data = NoteData {
            title: "Trip".to_string(),
            markdown: "pack bags".to_string(),
            tags: vec![Tag::new("t2", "travel"), Tag::new("t5", "family")],
        };
        let raw = RawNoteData::from(data);
        assert_eq!(raw.title, "Trip");
        assert_eq!(raw.markdown, "pack bags");
        assert_eq!(raw.tag_ids, vec!["t2".to_string(), "t5".to_string()]);
    }
}
