//! HTTP property-valuation provider.
//!
//! Talks to a hosted valuation API: one GET per address, JSON response with
//! the estimate and its comparable sales. The API response shape is mapped
//! into the core's domain models at this boundary.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use cookincapital_core::valuation::{
    Comparable, PropertyEstimate, PropertyValuationProviderTrait, ValuationError,
};

/// Default timeout for valuation API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for the valuation API.
#[derive(Debug, Clone)]
pub struct ValuationApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl ValuationApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// API Response Types (internal, for parsing the valuation API)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiEstimateResponse {
    address: String,
    estimated_value: Decimal,
    #[serde(default)]
    confidence: Option<Decimal>,
    #[serde(default)]
    comparables: Vec<ApiComparable>,
    #[serde(default)]
    as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiComparable {
    address: String,
    sale_price: Decimal,
    #[serde(default)]
    square_footage: Decimal,
    #[serde(default)]
    distance_miles: Option<Decimal>,
    #[serde(default)]
    sold_date: Option<NaiveDate>,
}

impl From<ApiComparable> for Comparable {
    fn from(api: ApiComparable) -> Self {
        Comparable {
            address: api.address,
            sale_price: api.sale_price,
            square_footage: api.square_footage,
            distance_miles: api.distance_miles,
            sold_date: api.sold_date,
        }
    }
}

/// Valuation provider backed by an HTTP API.
pub struct HttpValuationProvider {
    client: Client,
    config: ValuationApiConfig,
}

impl HttpValuationProvider {
    pub fn new(config: ValuationApiConfig) -> Result<Self, ValuationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ValuationError::Provider(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/estimate", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PropertyValuationProviderTrait for HttpValuationProvider {
    async fn estimate(&self, address: &str) -> Result<PropertyEstimate, ValuationError> {
        debug!("GET {} for '{}'", self.endpoint(), address);

        let mut request = self
            .client
            .get(self.endpoint())
            .query(&[("address", address)]);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ValuationError::Provider(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ValuationError::NotFound(address.to_string()));
        }
        if !response.status().is_success() {
            return Err(ValuationError::Provider(format!(
                "valuation API returned status {}",
                response.status()
            )));
        }

        let api: ApiEstimateResponse = response
            .json()
            .await
            .map_err(|e| ValuationError::Provider(format!("invalid response body: {e}")))?;

        Ok(PropertyEstimate {
            address: api.address,
            estimated_value: api.estimated_value,
            confidence: api.confidence,
            comparables: api.comparables.into_iter().map(Comparable::from).collect(),
            as_of: api.as_of.unwrap_or_else(Utc::now),
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
