//! Snapshot slot contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide whole-payload read/write over string-keyed snapshot slots.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `write_slot` is an upsert: the previous payload is fully replaced.
//! - `read_slot` returns `None` for slots that were never written.

use crate::db::DbError;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for snapshot slot operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value contract for persisted catalog snapshots.
///
/// The catalog store is generic over this trait so tests can substitute
/// failing or recording implementations.
pub trait SnapshotStore {
    /// Reads the full payload stored under `slot_key`, if any.
    fn read_slot(&self, slot_key: &str) -> StoreResult<Option<String>>;
    /// Overwrites the payload stored under `slot_key`.
    fn write_slot(&self, slot_key: &str, payload: &str) -> StoreResult<()>;
}

/// SQLite-backed snapshot store.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn read_slot(&self, slot_key: &str) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM snapshots WHERE slot_key = ?1;")?;

        let mut rows = stmt.query(params![slot_key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get("payload")?));
        }

        Ok(None)
    }

    fn write_slot(&self, slot_key: &str, payload: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO snapshots (slot_key, payload)
             VALUES (?1, ?2)
             ON CONFLICT (slot_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![slot_key, payload],
        )?;

        Ok(())
    }
}
