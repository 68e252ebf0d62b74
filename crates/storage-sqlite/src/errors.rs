//! Conversion of SQLite errors into the core's backend-agnostic types.

use cookincapital_core::errors::DatabaseError;

/// Maps a rusqlite error into the core `DatabaseError`, stringifying the
/// driver detail at the boundary.
pub fn map_sqlite_error(err: rusqlite::Error) -> DatabaseError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => {
            DatabaseError::NotFound("query returned no rows".to_string())
        }
        other => DatabaseError::QueryFailed(other.to_string()),
    }
}
