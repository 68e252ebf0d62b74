//! SQLite storage for CookinCapital.
//!
//! Implements the repository traits defined in `cookincapital-core`. Saved
//! deals are stored as raw `DealInput` JSON keyed by deal id and user/session
//! key; derived calculations are never written, so the numbers remain
//! reproducible from what is on disk.

pub mod db;
pub mod deals;
pub mod errors;

pub use db::SqliteStore;
pub use deals::SqliteDealRepository;
