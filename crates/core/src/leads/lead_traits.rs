use async_trait::async_trait;

use crate::leads::lead_model::{LeadError, LeadEvent};

/// Trait for CRM forwarder implementations.
#[async_trait]
pub trait CrmForwarderTrait: Send + Sync {
    /// Delivers one event to the CRM. Success or failure only; the caller
    /// decides whether failure matters.
    async fn forward(&self, event: &LeadEvent) -> Result<(), LeadError>;
}
