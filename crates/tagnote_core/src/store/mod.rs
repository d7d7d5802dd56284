//! Canonical in-memory collections for notes and tags.
//!
//! # Responsibility
//! - Own the ordered note and tag sequences and their mutation primitives.
//! - Keep persistence and id generation outside; callers pass ids in.
//!
//! # Invariants
//! - Both stores keep insertion order.
//! - Mutations addressing a missing id are no-ops and report `false`.
//! - Cross-store effects (tag delete cascade) live in the notebook service,
//!   which applies both halves before anything is observable.

pub mod note_store;
pub mod tag_store;
