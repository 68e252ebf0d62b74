//! Webhook forwarder for CRM lead events.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use cookincapital_core::leads::{CrmForwarderTrait, LeadError, LeadEvent};

/// Default timeout for webhook requests.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the CRM webhook endpoint.
#[derive(Debug, Clone)]
pub struct CrmWebhookConfig {
    pub webhook_url: String,
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl CrmWebhookConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Forwards lead events as JSON POSTs to a configured webhook URL.
pub struct WebhookCrmForwarder {
    client: Client,
    config: CrmWebhookConfig,
}

impl WebhookCrmForwarder {
    pub fn new(config: CrmWebhookConfig) -> Result<Self, LeadError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = &config.auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| LeadError::Forward(format!("invalid auth token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| LeadError::Forward(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl CrmForwarderTrait for WebhookCrmForwarder {
    async fn forward(&self, event: &LeadEvent) -> Result<(), LeadError> {
        debug!(
            "POST {} event '{}'",
            self.config.webhook_url, event.event
        );
        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(event)
            .send()
            .await
            .map_err(|e| LeadError::Forward(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LeadError::Forward(format!(
                "webhook returned status {}",
                response.status()
            )));
        }
        Ok(())
    }
}
