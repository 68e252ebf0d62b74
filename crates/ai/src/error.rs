//! AI narration error types.

use thiserror::Error;

/// Errors from the LLM narration boundary. All non-fatal to the analyzer:
/// a failed narration never blocks computing or displaying deal numbers.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for a provider that requires one.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (HTTP or API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
