//! Notebook use-case service.
//!
//! # Responsibility
//! - Own the note store, tag store, durable slot and id source.
//! - Apply each mutation, write it through, then re-derive the note view.
//! - Run the tag delete cascade as one indivisible step.
//!
//! # Invariants
//! - All writes go through `&mut self`; there is exactly one writer.
//! - A mutation is swapped into memory only after the slot write succeeded,
//!   so a failed write leaves stores and view untouched.
//! - After `delete_tag(id)` no note references `id`, in memory or in the slot.
//! - `list_notes` always reflects the latest committed stores.
//! - Mutations addressing a missing id return `Ok(false)` and write nothing.

use crate::config::NotebookConfig;
use crate::model::id::{IdSource, UuidIdSource};
use crate::model::note::{Note, NoteId, RawNote, RawNoteData};
use crate::model::tag::Tag;
use crate::search::filter::{filter_notes, NoteQuery};
use crate::slot::{encode, load_or, DurableSlot, SlotError};
use crate::store::note_store::NoteStore;
use crate::store::tag_store::TagStore;
use crate::view::derive::derive_notes;
use log::{debug, error, info};
use thiserror::Error;

pub type NotebookResult<T> = Result<T, NotebookError>;

/// Service error for notebook use-cases.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// Note title is empty or whitespace-only.
    #[error("note title must not be blank")]
    EmptyTitle,
    /// Notes and tags were configured to share one slot name.
    #[error("notes and tags cannot share slot `{0}`")]
    SlotNameClash(String),
    /// Persistence-layer failure.
    #[error(transparent)]
    Slot(#[from] SlotError),
}

/// Single-writer facade over the note and tag stores.
pub struct Notebook<S: DurableSlot, I: IdSource = UuidIdSource> {
    slot: S,
    ids: I,
    config: NotebookConfig,
    notes: NoteStore,
    tags: TagStore,
    view: Vec<Note>,
}

impl<S: DurableSlot> Notebook<S> {
    /// Loads both collections from `slot` under the default slot names.
    pub fn open(slot: S) -> NotebookResult<Self> {
        Self::open_with(slot, UuidIdSource, NotebookConfig::default())
    }
}

impl<S: DurableSlot, I: IdSource> Notebook<S, I> {
    /// Loads both collections from `slot`, defaulting each to empty.
    ///
    /// # Errors
    /// - `SlotNameClash` when both collections are configured under one name.
    /// - `Slot` when a stored value cannot be read or decoded.
    pub fn open_with(slot: S, ids: I, config: NotebookConfig) -> NotebookResult<Self> {
        if config.notes_slot == config.tags_slot {
            return Err(NotebookError::SlotNameClash(config.notes_slot));
        }
        let notes: NoteStore = load_or(&slot, &config.notes_slot, NoteStore::default())?;
        let tags: TagStore = load_or(&slot, &config.tags_slot, TagStore::default())?;
        info!(
            "event=notebook_open module=service status=ok notes={} tags={}",
            notes.len(),
            tags.len()
        );

        let mut notebook = Self {
            slot,
            ids,
            config,
            notes,
            tags,
            view: Vec::new(),
        };
        notebook.rederive();
        Ok(notebook)
    }

    /// Derived notes in insertion order.
    pub fn list_notes(&self) -> &[Note] {
        &self.view
    }

    pub fn get_note(&self, id: &str) -> Option<&Note> {
        self.view.iter().find(|note| note.id == id)
    }

    /// Raw persisted notes, with tag ids unresolved.
    pub fn raw_notes(&self) -> &[RawNote] {
        self.notes.list()
    }

    pub fn list_tags(&self) -> &[Tag] {
        self.tags.list()
    }

    pub fn get_tag(&self, id: &str) -> Option<&Tag> {
        self.tags.get(id)
    }

    /// Runs `query` against the current derived view.
    pub fn filter_notes(&self, query: &NoteQuery) -> Vec<Note> {
        filter_notes(&self.view, query)
    }

    /// Creates a note and returns its fresh id.
    ///
    /// Accepts either `RawNoteData` or a `NoteData` form payload.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title is blank.
    /// - `Slot` when the write-through fails.
    pub fn create_note(&mut self, data: impl Into<RawNoteData>) -> NotebookResult<NoteId> {
        let data = data.into();
        ensure_title(&data)?;

        let mut next = self.notes.clone();
        let id = next.create(self.ids.next_id(), data);
        self.commit(Some(next), None)?;
        info!("event=note_create module=service status=ok note_id={id}");
        Ok(id)
    }

    /// Replaces title, markdown and tags of note `id`.
    ///
    /// Returns `Ok(false)` without writing when `id` is unknown.
    pub fn update_note(
        &mut self,
        id: &str,
        data: impl Into<RawNoteData>,
    ) -> NotebookResult<bool> {
        let data = data.into();
        ensure_title(&data)?;

        let mut next = self.notes.clone();
        if !next.update(id, data) {
            debug!("event=note_update module=service status=skipped note_id={id}");
            return Ok(false);
        }
        self.commit(Some(next), None)?;
        info!("event=note_update module=service status=ok note_id={id}");
        Ok(true)
    }

    /// Deletes note `id`. Tags are untouched.
    pub fn delete_note(&mut self, id: &str) -> NotebookResult<bool> {
        let mut next = self.notes.clone();
        if !next.delete(id) {
            debug!("event=note_delete module=service status=skipped note_id={id}");
            return Ok(false);
        }
        self.commit(Some(next), None)?;
        info!("event=note_delete module=service status=ok note_id={id}");
        Ok(true)
    }

    /// Creates a tag with a fresh id. Labels are stored as given, even empty.
    pub fn create_tag(&mut self, label: impl Into<String>) -> NotebookResult<Tag> {
        let mut next = self.tags.clone();
        let tag = next.create(self.ids.next_id(), label.into());
        self.commit(None, Some(next))?;
        info!(
            "event=tag_create module=service status=ok tag_id={}",
            tag.id
        );
        Ok(tag)
    }

    /// Relabels tag `id`. Notes keep referencing it by id.
    pub fn rename_tag(&mut self, id: &str, label: impl Into<String>) -> NotebookResult<bool> {
        let mut next = self.tags.clone();
        if !next.rename(id, label) {
            debug!("event=tag_rename module=service status=skipped tag_id={id}");
            return Ok(false);
        }
        self.commit(None, Some(next))?;
        info!("event=tag_rename module=service status=ok tag_id={id}");
        Ok(true)
    }

    /// Deletes tag `id` and prunes it from every note in one step.
    ///
    /// Both collections are written in a single `write_all` call, so the slot
    /// never holds the tag removal without the matching note pruning.
    pub fn delete_tag(&mut self, id: &str) -> NotebookResult<bool> {
        let mut next_tags = self.tags.clone();
        let removed = next_tags.delete(id);

        let mut next_notes = self.notes.clone();
        let pruned = next_notes.remove_tag(id);

        // A dangling reference with no tag left still gets pruned.
        if !removed && pruned == 0 {
            debug!("event=tag_delete module=service status=skipped tag_id={id}");
            return Ok(false);
        }

        let notes = (pruned > 0).then_some(next_notes);
        self.commit(notes, Some(next_tags))?;
        info!(
            "event=tag_delete module=service status=ok tag_id={} pruned_notes={}",
            id, pruned
        );
        Ok(removed)
    }

    /// Recomputes the derived note view from the current stores.
    pub fn rederive(&mut self) {
        self.view = derive_notes(self.notes.list(), self.tags.list());
    }

    /// Gives back the slot, e.g. to reopen a notebook over it.
    pub fn into_slot(self) -> S {
        self.slot
    }

    fn commit(&mut self, notes: Option<NoteStore>, tags: Option<TagStore>) -> NotebookResult<()> {
        let mut entries = Vec::with_capacity(2);
        if let Some(notes) = notes.as_ref() {
            let name = self.config.notes_slot.as_str();
            entries.push((name, encode(name, notes)?));
        }
        if let Some(tags) = tags.as_ref() {
            let name = self.config.tags_slot.as_str();
            entries.push((name, encode(name, tags)?));
        }

        if let Err(err) = self.slot.write_all(&entries) {
            error!(
                "event=slot_write module=service status=error entries={} error={}",
                entries.len(),
                err
            );
            return Err(err.into());
        }

        if let Some(notes) = notes {
            self.notes = notes;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        self.rederive();
        Ok(())
    }
}

fn ensure_title(data: &RawNoteData) -> NotebookResult<()> {
    if data.title.trim().is_empty() {
        return Err(NotebookError::EmptyTitle);
    }
    Ok(())
}
