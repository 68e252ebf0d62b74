//! Property valuation lookup.
//!
//! An external collaborator consumed as a single capability: given an
//! address, return an estimated value and comparable sales. Lookups are
//! best-effort; a failure is surfaced to the user but never interferes
//! with evaluating or displaying deal numbers.

pub mod valuation_model;
pub mod valuation_service;
pub mod valuation_traits;

pub use valuation_model::{Comparable, PropertyEstimate, ValuationError};
pub use valuation_service::ValuationService;
pub use valuation_traits::PropertyValuationProviderTrait;
