use async_trait::async_trait;

use crate::deals::deal_model::{Deal, DealCalculations, DealInput, NewDeal};
use crate::errors::Result;

/// Trait for saved-deal repository operations.
///
/// Key-value semantics: deals are stored by id and scoped to a user/session
/// key. Implementations persist the raw `DealInput` only, never derived
/// calculations, so the numbers stay reproducible.
#[async_trait]
pub trait DealRepositoryTrait: Send + Sync {
    fn get_deal(&self, deal_id: &str) -> Result<Deal>;
    fn list_deals_for_user(&self, user_id: &str) -> Result<Vec<Deal>>;
    async fn save_deal(&self, new_deal: NewDeal) -> Result<Deal>;
    async fn delete_deal(&self, deal_id: &str) -> Result<()>;
}

/// Trait for deal service operations.
#[async_trait]
pub trait DealServiceTrait: Send + Sync {
    /// Validates and evaluates a fully-populated input record.
    fn analyze(&self, input: &DealInput) -> Result<DealCalculations>;
    /// Loads a saved deal and evaluates its stored input.
    fn analyze_saved(&self, deal_id: &str) -> Result<DealCalculations>;
    fn get_deal(&self, deal_id: &str) -> Result<Deal>;
    fn list_deals(&self, user_id: &str) -> Result<Vec<Deal>>;
    async fn save_deal(&self, new_deal: NewDeal) -> Result<Deal>;
    async fn delete_deal(&self, deal_id: &str) -> Result<()>;
}
