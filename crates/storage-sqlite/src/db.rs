//! SQLite connection handling and schema setup.

use std::path::Path;
use std::sync::{Arc, Mutex};

use log::info;
use rusqlite::Connection;

use cookincapital_core::errors::{DatabaseError, Result};

use crate::errors::map_sqlite_error;

/// Schema applied idempotently on open.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS deals (
    id          TEXT PRIMARY KEY NOT NULL,
    user_id     TEXT NOT NULL,
    name        TEXT NOT NULL,
    input_json  TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_deals_user_id ON deals (user_id);
";

/// A shared SQLite handle.
///
/// The store is a single low-traffic key-value table, so one mutex-guarded
/// connection is sufficient; repositories clone the handle.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and applies the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// In-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        info!("SQLite store ready");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` with the connection locked.
    pub(crate) fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> rusqlite::Result<T>) -> Result<T> {
        let guard = self
            .conn
            .lock()
            .map_err(|_| DatabaseError::Internal("connection mutex poisoned".to_string()))?;
        f(&guard).map_err(|e| map_sqlite_error(e).into())
    }
}
