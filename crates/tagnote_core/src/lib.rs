//! Core state layer for tagged notes.
//! Owns the note/tag invariants: tag deletes cascade into notes, and the
//! derived note view is rebuilt after every mutation.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod slot;
pub mod store;
pub mod view;

pub use config::{NotebookConfig, DEFAULT_NOTES_SLOT, DEFAULT_TAGS_SLOT};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::id::{IdSource, SequentialIdSource, UuidIdSource};
pub use model::note::{Note, NoteData, NoteId, RawNote, RawNoteData};
pub use model::tag::{Tag, TagId};
pub use search::filter::{filter_notes, NoteQuery};
pub use service::notebook_service::{Notebook, NotebookError, NotebookResult};
pub use slot::{DurableSlot, MemorySlot, SlotError, SlotResult, SqliteSlot};
pub use store::note_store::NoteStore;
pub use store::tag_store::TagStore;
pub use view::derive::derive_notes;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
