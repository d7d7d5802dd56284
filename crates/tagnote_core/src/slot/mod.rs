//! Durable named slots holding one JSON value each.
//!
//! # Responsibility
//! - Define the persistence contract the notebook writes through.
//! - Provide typed load/store helpers over raw JSON text.
//!
//! # Invariants
//! - A write fully replaces the previous value under that name.
//! - `write_all` applies every entry or none of them.
//! - Loading a name that was never written yields the caller's default.

use crate::db::DbError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod memory;
pub mod sqlite;

pub use memory::MemorySlot;
pub use sqlite::SqliteSlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Failure reading or writing a durable slot.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("slot `{name}` holds invalid json: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("connection is missing required table `{0}`")]
    MissingRequiredTable(&'static str),
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Named JSON value storage.
pub trait DurableSlot {
    /// Returns the raw JSON last written under `name`, if any.
    fn read(&self, name: &str) -> SlotResult<Option<String>>;

    /// Writes every `(name, json)` pair as one unit.
    fn write_all(&mut self, entries: &[(&str, String)]) -> SlotResult<()>;

    fn write(&mut self, name: &str, json: String) -> SlotResult<()> {
        self.write_all(&[(name, json)])
    }
}

/// Loads and decodes the value under `name`, or returns `default` when absent.
pub fn load_or<T, S>(slot: &S, name: &str, default: T) -> SlotResult<T>
where
    T: DeserializeOwned,
    S: DurableSlot + ?Sized,
{
    match slot.read(name)? {
        Some(json) => serde_json::from_str(&json).map_err(|source| SlotError::Json {
            name: name.to_string(),
            source,
        }),
        None => Ok(default),
    }
}

/// Encodes `value` for storage under `name`.
pub fn encode<T: Serialize + ?Sized>(name: &str, value: &T) -> SlotResult<String> {
    serde_json::to_string(value).map_err(|source| SlotError::Json {
        name: name.to_string(),
        source,
    })
}
