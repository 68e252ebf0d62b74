use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default holding period for a new deal, in months
pub const DEFAULT_HOLDING_PERIOD_MONTHS: u32 = 6;

/// Default listing agent commission, percent of ARV
pub const DEFAULT_AGENT_COMMISSION_PERCENT: Decimal = dec!(6);

/// Default loan origination points, percent of loan amount
pub const DEFAULT_LOAN_POINTS: Decimal = dec!(2);

/// Default annual interest rate, percent (hard-money baseline)
pub const DEFAULT_INTEREST_RATE: Decimal = dec!(12);

/// Default loan term for a new deal, in months
pub const DEFAULT_LOAN_TERM_MONTHS: u32 = 12;

/// ARV multiplier used by the maximum-allowable-offer heuristic ("70% rule")
pub const MAO_ARV_RATIO: Decimal = dec!(0.70);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
