use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::leads::lead_model::{LeadError, LeadEvent};
use crate::leads::lead_traits::CrmForwarderTrait;

/// Default deadline for one forward attempt.
const DEFAULT_FORWARD_TIMEOUT_SECS: u64 = 10;

/// Captures leads and forwards them to the CRM without ever blocking the
/// calling path.
pub struct LeadService {
    forwarder: Arc<dyn CrmForwarderTrait>,
    forward_timeout: Duration,
}

impl LeadService {
    pub fn new(forwarder: Arc<dyn CrmForwarderTrait>) -> Self {
        Self {
            forwarder,
            forward_timeout: Duration::from_secs(DEFAULT_FORWARD_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(forwarder: Arc<dyn CrmForwarderTrait>, forward_timeout: Duration) -> Self {
        Self {
            forwarder,
            forward_timeout,
        }
    }

    /// Fire-and-forget capture: spawns the forward and returns immediately.
    /// Failures and timeouts are logged, never propagated.
    pub fn capture(&self, event: LeadEvent) -> JoinHandle<()> {
        let forwarder = Arc::clone(&self.forwarder);
        let deadline = self.forward_timeout;
        tokio::spawn(async move {
            if let Err(err) = Self::forward_once(forwarder.as_ref(), &event, deadline).await {
                warn!("CRM forward for event '{}' failed: {}", event.event, err);
            }
        })
    }

    /// Synchronous-style variant for callers that want the outcome, e.g. a
    /// settings panel test button.
    pub async fn capture_and_wait(&self, event: &LeadEvent) -> Result<(), LeadError> {
        Self::forward_once(self.forwarder.as_ref(), event, self.forward_timeout).await
    }

    async fn forward_once(
        forwarder: &dyn CrmForwarderTrait,
        event: &LeadEvent,
        deadline: Duration,
    ) -> Result<(), LeadError> {
        debug!("Forwarding CRM event '{}'", event.event);
        match timeout(deadline, forwarder.forward(event)).await {
            Ok(result) => result,
            Err(_) => Err(LeadError::Timeout(deadline.as_secs())),
        }
    }
}
