//! Domain model for tagged notes.
//!
//! # Responsibility
//! - Define the persisted shapes (`Tag`, `RawNote`) and the derived `Note`.
//! - Define how fresh identifiers are produced.
//!
//! # Invariants
//! - Identifiers are opaque strings, unique within their own collection.
//! - `Note` is never persisted; it is rebuilt from `RawNote` + `Tag`.

pub mod id;
pub mod note;
pub mod tag;
