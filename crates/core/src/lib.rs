//! CookinCapital Core - Domain entities, services, and traits.
//!
//! This crate contains the deal underwriting engine and the traits its
//! collaborators implement. It is storage- and transport-agnostic: the
//! SQLite repository lives in `cookincapital-storage-sqlite` and the HTTP
//! collaborators (CRM webhook, property valuation lookup) in
//! `cookincapital-connect`.

pub mod constants;
pub mod deals;
pub mod errors;
pub mod leads;
pub mod utils;
pub mod valuation;

// Re-export the engine surface most callers need
pub use deals::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
