//! CRM lead capture.
//!
//! The CRM is an external collaborator consumed as a single capability:
//! accept an event name and payload, return success or failure. Forwarding
//! is fire-and-forget with a timeout; a failed forward must never block the
//! deal analyzer from producing or displaying its numbers.

pub mod lead_model;
pub mod lead_service;
pub mod lead_traits;

pub use lead_model::{LeadContact, LeadError, LeadEvent};
pub use lead_service::LeadService;
pub use lead_traits::CrmForwarderTrait;
