//! Read-only projections over the canonical stores.
//!
//! # Invariants
//! - Projections are pure functions of their inputs; no hidden caches.

pub mod derive;
