use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A provider's estimate for one address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEstimate {
    pub address: String,
    pub estimated_value: Decimal,
    /// Provider confidence in [0, 1], when reported.
    pub confidence: Option<Decimal>,
    pub comparables: Vec<Comparable>,
    pub as_of: DateTime<Utc>,
}

/// A comparable sale backing an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparable {
    pub address: String,
    pub sale_price: Decimal,
    pub square_footage: Decimal,
    pub distance_miles: Option<Decimal>,
    pub sold_date: Option<NaiveDate>,
}

/// Errors from the valuation lookup boundary. All non-fatal to the engine.
#[derive(Debug, Error)]
pub enum ValuationError {
    #[error("No estimate available for address: {0}")]
    NotFound(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Lookup timed out after {0}s")]
    Timeout(u64),
}
