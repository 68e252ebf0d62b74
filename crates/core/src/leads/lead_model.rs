use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// An event forwarded to the CRM: a name plus an arbitrary JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadEvent {
    pub event: String,
    pub payload: Value,
}

impl LeadEvent {
    pub fn new(event: impl Into<String>, payload: Value) -> Self {
        Self {
            event: event.into(),
            payload,
        }
    }

    /// Event emitted when the chatbot captures contact details.
    pub fn lead_captured(contact: &LeadContact) -> Self {
        Self::new("lead_captured", json!(contact))
    }
}

/// Contact details captured by the chatbot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Where the lead came from, e.g. "chatbot" or "deal-analyzer".
    pub source: String,
}

/// Errors from the CRM forwarding boundary.
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Forward failed: {0}")]
    Forward(String),

    #[error("Forward timed out after {0}s")]
    Timeout(u64),
}
