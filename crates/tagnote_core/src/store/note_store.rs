//! Note store.

use crate::model::note::{NoteId, RawNote, RawNoteData};
use serde::{Deserialize, Serialize};

/// Ordered collection of raw notes. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore {
    notes: Vec<RawNote>,
}

impl NoteStore {
    pub fn new(notes: Vec<RawNote>) -> Self {
        Self { notes }
    }

    /// Appends a note under `id` and returns that id.
    ///
    /// The caller guarantees `id` is fresh.
    pub fn create(&mut self, id: NoteId, data: RawNoteData) -> NoteId {
        self.notes.push(RawNote::new(id.clone(), data));
        id
    }

    /// Notes in insertion order.
    pub fn list(&self) -> &[RawNote] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&RawNote> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Replaces the editable fields of one note, keeping its id and position.
    pub fn update(&mut self, id: &str, data: RawNoteData) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.data = data;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    /// Strips `tag_id` from every note's tag list; returns how many notes changed.
    pub fn remove_tag(&mut self, tag_id: &str) -> usize {
        let mut changed = 0;
        for note in &mut self.notes {
            if note.data.references(tag_id) {
                note.data.tag_ids.retain(|id| id != tag_id);
                changed += 1;
            }
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::model::note::RawNoteData;

    fn seeded() -> NoteStore {
        let mut store = NoteStore::default();
        store.create("n1".to_string(), RawNoteData::new("first", "").with_tag("t1"));
        store.create(
            "n2".to_string(),
            RawNoteData::new("second", "").with_tag("t2").with_tag("t1"),
        );
        store.create("n3".to_string(), RawNoteData::new("third", "").with_tag("t2"));
        store
    }

    #[test]
    fn list_keeps_insertion_order() {
        let store = seeded();
        let ids: Vec<&str> = store.list().iter().map(|note| note.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n2", "n3"]);
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut store = seeded();
        assert!(store.update("n2", RawNoteData::new("renamed", "body")));

        let updated = store.get("n2").unwrap();
        assert_eq!(updated.data.title, "renamed");
        assert_eq!(updated.data.markdown, "body");
        assert!(updated.data.tag_ids.is_empty());
        assert_eq!(store.list()[1].id, "n2");
    }

    #[test]
    fn missing_ids_are_no_ops() {
        let mut store = seeded();
        let before = store.clone();
        assert!(!store.update("missing", RawNoteData::new("x", "")));
        assert!(!store.delete("missing"));
        assert_eq!(store, before);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut store = seeded();
        assert!(store.delete("n2"));
        assert_eq!(store.len(), 2);
        assert!(store.get("n2").is_none());
    }

    #[test]
    fn remove_tag_strips_every_occurrence() {
        let mut store = seeded();
        store.update(
            "n3",
            RawNoteData::new("third", "").with_tag("t1").with_tag("t1"),
        );

        assert_eq!(store.remove_tag("t1"), 3);
        assert!(store.list().iter().all(|note| !note.data.references("t1")));
        assert_eq!(store.get("n2").unwrap().data.tag_ids, vec!["t2".to_string()]);
        assert_eq!(store.len(), 3);
    }
}
