//! Note × tag join.
//!
//! # Responsibility
//! - Resolve every raw note's tag ids to full tags.
//!
//! # Invariants
//! - Output order equals note insertion order.
//! - Tag order within a note follows its `tag_ids`; repeats resolve once.
//! - Ids with no matching tag are dropped, never reported as errors.
//! - Same inputs always produce structurally equal output.

use crate::model::note::{Note, RawNote};
use crate::model::tag::Tag;
use std::collections::{HashMap, HashSet};

/// Builds the derived note view from raw notes and the current tags.
pub fn derive_notes(notes: &[RawNote], tags: &[Tag]) -> Vec<Note> {
    let by_id: HashMap<&str, &Tag> = tags.iter().map(|tag| (tag.id.as_str(), tag)).collect();
    notes
        .iter()
        .map(|note| resolve_note(note, &by_id))
        .collect()
}

fn resolve_note(note: &RawNote, by_id: &HashMap<&str, &Tag>) -> Note {
    let mut seen = HashSet::new();
    let tags = note
        .data
        .tag_ids
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| by_id.get(id.as_str()).map(|tag| (*tag).clone()))
        .collect();

    Note {
        id: note.id.clone(),
        title: note.data.title.clone(),
        markdown: note.data.markdown.clone(),
        tags,
    }
}
