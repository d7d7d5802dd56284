//! In-process slot backend for tests and throwaway sessions.

use super::{DurableSlot, SlotResult};
use std::collections::HashMap;

/// HashMap-backed slot. Values live as long as the instance.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemorySlot {
    /// Number of successful `write_all` calls, for write-through assertions.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl DurableSlot for MemorySlot {
    fn read(&self, name: &str) -> SlotResult<Option<String>> {
        Ok(self.values.get(name).cloned())
    }

    fn write_all(&mut self, entries: &[(&str, String)]) -> SlotResult<()> {
        for (name, json) in entries {
            self.values.insert((*name).to_string(), json.clone());
        }
        self.writes += 1;
        Ok(())
    }
}
