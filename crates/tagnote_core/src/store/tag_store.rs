//! Tag store.

use crate::model::tag::{Tag, TagId};
use serde::{Deserialize, Serialize};

/// Ordered collection of tags. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagStore {
    tags: Vec<Tag>,
}

impl TagStore {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    /// Appends a tag under `id` and returns a copy of it.
    pub fn create(&mut self, id: TagId, label: impl Into<String>) -> Tag {
        let tag = Tag::new(id, label);
        self.tags.push(tag.clone());
        tag
    }

    /// Tags in insertion order.
    pub fn list(&self) -> &[Tag] {
        &self.tags
    }

    pub fn get(&self, id: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    pub fn rename(&mut self, id: &str, label: impl Into<String>) -> bool {
        match self.tags.iter_mut().find(|tag| tag.id == id) {
            Some(tag) => {
                tag.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Removes the tag itself only. Use `Notebook::delete_tag` to also prune
    /// note references.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.id != id);
        self.tags.len() != before
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
