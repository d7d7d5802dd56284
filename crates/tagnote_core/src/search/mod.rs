//! Retrieval over the derived note view.
//!
//! # Responsibility
//! - Match derived notes against title and tag criteria.
//!
//! # Invariants
//! - Search reads only the derived view, never the raw stores.

pub mod filter;
