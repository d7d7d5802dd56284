//! Identifier sources.
//!
//! # Invariants
//! - `next_id` never returns the same value twice for one source instance.

use uuid::Uuid;

/// Produces fresh identifiers for newly created notes and tags.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUID strings. Default source for real sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix><n>` identifiers, starting at 1.
///
/// Only collision-free as long as persisted data was produced by a source with
/// a different prefix or a lower counter.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    prefix: String,
    counter: u64,
}

impl SequentialIdSource {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}{}", self.prefix, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdSource, SequentialIdSource, UuidIdSource};
    use std::collections::HashSet;

    #[test]
    fn sequential_source_counts_from_one() {
        let mut ids = SequentialIdSource::new("id-");
        assert_eq!(ids.next_id(), "id-1");
        assert_eq!(ids.next_id(), "id-2");
    }

    #[test]
    fn uuid_source_does_not_repeat() {
        let mut ids = UuidIdSource;
        let seen: HashSet<String> = (0..64).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 64);
    }
}
