//! HTTP implementations of CookinCapital's outward-facing collaborators.
//!
//! Two capabilities live here, each behind a trait from
//! `cookincapital-core`:
//! - CRM lead forwarding: accept an event name and payload, return
//!   success/failure (`WebhookCrmForwarder`).
//! - Property valuation lookup: given an address, return an estimated value
//!   and comparables (`HttpValuationProvider`).

pub mod crm;
pub mod property_lookup;

pub use crm::{CrmWebhookConfig, WebhookCrmForwarder};
pub use property_lookup::{HttpValuationProvider, ValuationApiConfig};
