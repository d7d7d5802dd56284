//! SQLite slot backend.
//!
//! # Responsibility
//! - Persist slot values in the `slots` table created by migrations.
//!
//! # Invariants
//! - `write_all` runs inside one IMMEDIATE transaction.
//! - Construction rejects connections whose schema lacks `slots`.

use super::{DurableSlot, SlotError, SlotResult};
use crate::db::migrations::{current_user_version, latest_version};
use crate::db::{open_db, open_db_in_memory, DbError};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use std::path::Path;

const SLOTS_TABLE: &str = "slots";

/// Slot storage backed by one SQLite connection.
pub struct SqliteSlot {
    conn: Connection,
}

impl SqliteSlot {
    /// Wraps a migrated connection.
    pub fn try_new(conn: Connection) -> SlotResult<Self> {
        ensure_slot_connection_ready(&conn)?;
        Ok(Self { conn })
    }

    /// Opens (and migrates) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> SlotResult<Self> {
        Self::try_new(open_db(path)?)
    }

    pub fn open_in_memory() -> SlotResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl DurableSlot for SqliteSlot {
    fn read(&self, name: &str) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1;",
                [name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_all(&mut self, entries: &[(&str, String)]) -> SlotResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        for (name, json) in entries {
            tx.execute(
                "INSERT INTO slots (name, value) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET
                    value = excluded.value,
                    updated_at = (strftime('%s', 'now') * 1000);",
                params![name, json],
            )?;
        }
        tx.commit()?;

        debug!(
            "event=slot_write module=slot status=ok entries={}",
            entries.len()
        );
        Ok(())
    }
}

fn ensure_slot_connection_ready(conn: &Connection) -> SlotResult<()> {
    let version = current_user_version(conn)?;
    if version > latest_version() {
        return Err(SlotError::Db(DbError::UnsupportedSchemaVersion {
            db_version: version,
            latest_supported: latest_version(),
        }));
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [SLOTS_TABLE],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(SlotError::MissingRequiredTable(SLOTS_TABLE));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SqliteSlot;
    use crate::slot::{DurableSlot, SlotError};
    use rusqlite::Connection;

    #[test]
    fn read_returns_none_for_unknown_names() {
        let slot = SqliteSlot::open_in_memory().unwrap();
        assert!(slot.read("NOTES").unwrap().is_none());
    }

    #[test]
    fn write_replaces_previous_value() {
        let mut slot = SqliteSlot::open_in_memory().unwrap();
        slot.write("TAGS", "[]".to_string()).unwrap();
        slot.write("TAGS", r#"[{"id":"t1","label":"work"}]"#.to_string())
            .unwrap();

        assert_eq!(
            slot.read("TAGS").unwrap().as_deref(),
            Some(r#"[{"id":"t1","label":"work"}]"#)
        );
        let rows: i64 = slot
            .connection()
            .query_row("SELECT COUNT(*) FROM slots;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn unmigrated_connection_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteSlot::try_new(conn).err().unwrap();
        assert!(matches!(err, SlotError::MissingRequiredTable("slots")));
    }
}
