use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::deals::deal_calculator::evaluate;
use crate::deals::deal_model::{Deal, DealCalculations, DealInput, NewDeal};
use crate::deals::deal_traits::{DealRepositoryTrait, DealServiceTrait};
use crate::errors::{Error, Result, ValidationError};

/// Orchestrates the valuation engine and saved-deal persistence.
///
/// Every display and export path goes through `analyze`; there is exactly
/// one place the formulas live.
pub struct DealService {
    deal_repository: Arc<dyn DealRepositoryTrait>,
}

impl DealService {
    pub fn new(deal_repository: Arc<dyn DealRepositoryTrait>) -> Self {
        DealService { deal_repository }
    }

    /// Rejects inputs the form layer should never hand over. The engine
    /// itself stays total; this wrapper does not change its semantics.
    fn validate(input: &DealInput) -> Result<()> {
        if input.holding.holding_period_months < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "holding period must be at least 1 month".to_string(),
            )));
        }
        for item in &input.custom_rehab_items {
            if item.cost < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "custom rehab item '{}' has a negative cost",
                    item.name
                ))));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DealServiceTrait for DealService {
    fn analyze(&self, input: &DealInput) -> Result<DealCalculations> {
        Self::validate(input)?;
        Ok(evaluate(input))
    }

    fn analyze_saved(&self, deal_id: &str) -> Result<DealCalculations> {
        let deal = self.deal_repository.get_deal(deal_id)?;
        debug!("Re-evaluating saved deal {}", deal.id);
        self.analyze(&deal.input)
    }

    fn get_deal(&self, deal_id: &str) -> Result<Deal> {
        self.deal_repository.get_deal(deal_id)
    }

    fn list_deals(&self, user_id: &str) -> Result<Vec<Deal>> {
        self.deal_repository.list_deals_for_user(user_id)
    }

    async fn save_deal(&self, new_deal: NewDeal) -> Result<Deal> {
        Self::validate(&new_deal.input)?;
        self.deal_repository.save_deal(new_deal).await
    }

    async fn delete_deal(&self, deal_id: &str) -> Result<()> {
        self.deal_repository.delete_deal(deal_id).await
    }
}
