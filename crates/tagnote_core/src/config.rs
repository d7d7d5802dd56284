//! Notebook configuration.

use serde::{Deserialize, Serialize};

/// Default slot name for the note collection.
pub const DEFAULT_NOTES_SLOT: &str = "NOTES";
/// Default slot name for the tag collection.
pub const DEFAULT_TAGS_SLOT: &str = "TAGS";

/// Slot names the notebook reads from and writes through to.
///
/// Missing fields fall back to `NOTES` / `TAGS` when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotebookConfig {
    pub notes_slot: String,
    pub tags_slot: String,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            notes_slot: DEFAULT_NOTES_SLOT.to_string(),
            tags_slot: DEFAULT_TAGS_SLOT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NotebookConfig;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: NotebookConfig = serde_json::from_str(r#"{"tagsSlot":"LABELS"}"#).unwrap();
        assert_eq!(config.notes_slot, "NOTES");
        assert_eq!(config.tags_slot, "LABELS");
    }
}
