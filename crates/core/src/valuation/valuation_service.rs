use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::time::timeout;

use crate::errors::Result;
use crate::valuation::valuation_model::{PropertyEstimate, ValuationError};
use crate::valuation::valuation_traits::PropertyValuationProviderTrait;

/// Default deadline for one lookup.
const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 15;

/// Wraps a valuation provider with a timeout and the non-fatal error
/// contract the analyzer relies on.
pub struct ValuationService {
    provider: Arc<dyn PropertyValuationProviderTrait>,
    lookup_timeout: Duration,
}

impl ValuationService {
    pub fn new(provider: Arc<dyn PropertyValuationProviderTrait>) -> Self {
        Self {
            provider,
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(
        provider: Arc<dyn PropertyValuationProviderTrait>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            provider,
            lookup_timeout,
        }
    }

    /// Looks up an estimate, surfacing failures as a core error the caller
    /// shows to the user.
    pub async fn estimate(&self, address: &str) -> Result<PropertyEstimate> {
        debug!(
            "Requesting valuation for '{}' from provider {}",
            address,
            self.provider.name()
        );
        let estimate = match timeout(self.lookup_timeout, self.provider.estimate(address)).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(ValuationError::Timeout(self.lookup_timeout.as_secs()).into());
            }
        };
        Ok(estimate)
    }

    /// Best-effort variant: logs the failure and returns `None` so callers
    /// can keep rendering engine output without an estimate.
    pub async fn try_estimate(&self, address: &str) -> Option<PropertyEstimate> {
        match self.estimate(address).await {
            Ok(estimate) => Some(estimate),
            Err(err) => {
                warn!("Valuation lookup for '{}' failed: {}", address, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    struct FixedProvider;

    #[async_trait]
    impl PropertyValuationProviderTrait for FixedProvider {
        async fn estimate(&self, address: &str) -> std::result::Result<PropertyEstimate, ValuationError> {
            Ok(PropertyEstimate {
                address: address.to_string(),
                estimated_value: dec!(275000),
                confidence: Some(dec!(0.82)),
                comparables: Vec::new(),
                as_of: Utc::now(),
            })
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl PropertyValuationProviderTrait for FailingProvider {
        async fn estimate(&self, address: &str) -> std::result::Result<PropertyEstimate, ValuationError> {
            Err(ValuationError::NotFound(address.to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct SlowProvider;

    #[async_trait]
    impl PropertyValuationProviderTrait for SlowProvider {
        async fn estimate(&self, _address: &str) -> std::result::Result<PropertyEstimate, ValuationError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            unreachable!()
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    #[tokio::test]
    async fn estimate_passes_through_the_provider() {
        let service = ValuationService::new(Arc::new(FixedProvider));
        let estimate = service.estimate("412 Maple St, Tulsa, OK 74104").await.unwrap();
        assert_eq!(estimate.estimated_value, dec!(275000));
    }

    #[tokio::test]
    async fn try_estimate_absorbs_provider_failures() {
        let service = ValuationService::new(Arc::new(FailingProvider));
        assert!(service.try_estimate("nowhere").await.is_none());
    }

    #[tokio::test]
    async fn slow_provider_hits_the_deadline() {
        let service =
            ValuationService::with_timeout(Arc::new(SlowProvider), Duration::from_millis(20));
        let result = service.estimate("412 Maple St").await;
        assert!(result.is_err());
    }
}
