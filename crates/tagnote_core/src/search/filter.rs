//! Title + tag filter over derived notes.
//!
//! # Invariants
//! - Output is a subsequence of the input; relative order is preserved.
//! - Required tags are AND-combined and compared by id only.
//! - An empty query matches every note.

use crate::model::note::Note;
use crate::model::tag::Tag;

/// Filter criteria supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    /// Case-insensitive substring matched against note titles. Empty matches all.
    pub title: String,
    /// Every one of these must be attached to a note for it to match.
    pub required_tags: Vec<Tag>,
}

impl NoteQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.required_tags.push(tag);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.required_tags.is_empty()
    }

    /// Returns whether `note` satisfies both the title and the tag criteria.
    pub fn matches(&self, note: &Note) -> bool {
        self.matches_title(note) && self.matches_tags(note)
    }

    fn matches_title(&self, note: &Note) -> bool {
        self.title.is_empty() || note.title.to_lowercase().contains(&self.title.to_lowercase())
    }

    fn matches_tags(&self, note: &Note) -> bool {
        self.required_tags.iter().all(|tag| note.has_tag(&tag.id))
    }
}

/// Returns the notes matching `query`, in input order.
pub fn filter_notes(notes: &[Note], query: &NoteQuery) -> Vec<Note> {
    if query.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|note| query.matches(note))
        .cloned()
        .collect()
}
