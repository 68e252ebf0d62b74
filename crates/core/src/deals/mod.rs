pub mod deal_calculator;
pub mod deal_model;
pub mod deal_service;
pub mod deal_traits;
pub mod worksheet;

pub use deal_calculator::{evaluate, monthly_loan_payment, total_rehab_cost};
pub use deal_model::*;
pub use deal_service::DealService;
pub use deal_traits::{DealRepositoryTrait, DealServiceTrait};
pub use worksheet::render_worksheet;
