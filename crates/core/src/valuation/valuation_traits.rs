use async_trait::async_trait;

use crate::valuation::valuation_model::{PropertyEstimate, ValuationError};

/// Trait for property valuation providers.
#[async_trait]
pub trait PropertyValuationProviderTrait: Send + Sync {
    /// Looks up an estimate for a single-line address.
    async fn estimate(&self, address: &str) -> Result<PropertyEstimate, ValuationError>;

    /// Short provider name for logging.
    fn name(&self) -> &'static str;
}
