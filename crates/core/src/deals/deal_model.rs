//! Deal underwriting domain models.
//!
//! `DealInput` is the fully-populated, immutable record the valuation engine
//! evaluates. It is built field-by-field by the form layer and persisted
//! verbatim when saved; derived numbers (`DealCalculations`) are a pure
//! projection and are never stored.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AGENT_COMMISSION_PERCENT, DEFAULT_HOLDING_PERIOD_MONTHS, DEFAULT_INTEREST_RATE,
    DEFAULT_LOAN_POINTS, DEFAULT_LOAN_TERM_MONTHS,
};

/// Property classification, display-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    #[default]
    SingleFamily,
    MultiFamily,
    Condo,
    Townhouse,
    Land,
    Commercial,
}

/// Property attributes. Used for display and per-square-foot ratios only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyInfo {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: Decimal,
    pub square_footage: Decimal,
    pub year_built: Option<i32>,
    pub lot_size: Decimal,
}

impl PropertyInfo {
    /// Single-line address for valuation lookups and the worksheet header.
    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}

/// Pricing inputs. Non-negative dollar amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub asking_price: Decimal,
    /// After-repair value: projected market value once rehab is complete.
    pub arv: Decimal,
    pub purchase_price: Decimal,
}

/// The 33 fixed rehab cost buckets, each a non-negative dollar amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RehabCategories {
    pub demolition: Decimal,
    pub dumpsters: Decimal,
    pub foundation: Decimal,
    pub grading_drainage: Decimal,
    pub framing: Decimal,
    pub roofing: Decimal,
    pub gutters_soffit: Decimal,
    pub siding_exterior_paint: Decimal,
    pub windows: Decimal,
    pub exterior_doors: Decimal,
    pub garage_doors: Decimal,
    pub landscaping: Decimal,
    pub fencing: Decimal,
    pub deck_patio: Decimal,
    pub plumbing: Decimal,
    pub electrical: Decimal,
    pub hvac: Decimal,
    pub water_heater: Decimal,
    pub insulation: Decimal,
    pub drywall: Decimal,
    pub interior_paint: Decimal,
    pub trim_doors: Decimal,
    pub kitchen_cabinets: Decimal,
    pub countertops: Decimal,
    pub appliances: Decimal,
    pub bathrooms: Decimal,
    pub flooring: Decimal,
    pub basement: Decimal,
    pub pest_treatment: Decimal,
    pub permits_fees: Decimal,
    pub cleaning: Decimal,
    pub contingency: Decimal,
    pub miscellaneous: Decimal,
}

impl RehabCategories {
    /// All buckets as (label, amount) pairs, in worksheet order.
    pub fn entries(&self) -> [(&'static str, Decimal); 33] {
        [
            ("Demolition", self.demolition),
            ("Dumpsters", self.dumpsters),
            ("Foundation", self.foundation),
            ("Grading & Drainage", self.grading_drainage),
            ("Framing", self.framing),
            ("Roofing", self.roofing),
            ("Gutters & Soffit", self.gutters_soffit),
            ("Siding & Exterior Paint", self.siding_exterior_paint),
            ("Windows", self.windows),
            ("Exterior Doors", self.exterior_doors),
            ("Garage Doors", self.garage_doors),
            ("Landscaping", self.landscaping),
            ("Fencing", self.fencing),
            ("Deck & Patio", self.deck_patio),
            ("Plumbing", self.plumbing),
            ("Electrical", self.electrical),
            ("HVAC", self.hvac),
            ("Water Heater", self.water_heater),
            ("Insulation", self.insulation),
            ("Drywall", self.drywall),
            ("Interior Paint", self.interior_paint),
            ("Trim & Doors", self.trim_doors),
            ("Kitchen Cabinets", self.kitchen_cabinets),
            ("Countertops", self.countertops),
            ("Appliances", self.appliances),
            ("Bathrooms", self.bathrooms),
            ("Flooring", self.flooring),
            ("Basement", self.basement),
            ("Pest Treatment", self.pest_treatment),
            ("Permits & Fees", self.permits_fees),
            ("Cleaning", self.cleaning),
            ("Contingency", self.contingency),
            ("Miscellaneous", self.miscellaneous),
        ]
    }

    /// Sum of all 33 buckets. Custom items are added on top by the engine.
    pub fn total(&self) -> Decimal {
        self.entries().iter().map(|(_, amount)| *amount).sum()
    }
}

/// An open-ended, user-named rehab line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRehabItem {
    pub id: String,
    pub name: String,
    pub cost: Decimal,
}

/// How the deal is financed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinancingType {
    #[default]
    HardMoney,
    PrivateMoney,
    Conventional,
    Cash,
    Bridge,
    Dscr,
    Heloc,
    SellerFinance,
}

/// Rehab draw cadence. Informational only; does not affect totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawSchedule {
    Upfront,
    Monthly,
    #[default]
    PerMilestone,
}

/// Loan payment structure toggle from the financing panel.
///
/// Affects only the displayed `monthly_loan_payment`; the aggregate
/// `total_interest` always uses the interest-only model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanStructure {
    #[default]
    InterestOnly,
    Amortizing,
}

/// Financing inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financing {
    pub financing_type: FinancingType,
    pub loan_amount: Decimal,
    /// Annual interest rate, percent.
    pub interest_rate: Decimal,
    pub loan_term_months: u32,
    /// Origination points, percent of loan amount.
    pub loan_points: Decimal,
    pub rehab_financed: bool,
    pub rehab_loan_amount: Decimal,
    pub draw_schedule: DrawSchedule,
    pub loan_structure: LoanStructure,
}

impl Default for Financing {
    fn default() -> Self {
        Self {
            financing_type: FinancingType::default(),
            loan_amount: Decimal::ZERO,
            interest_rate: DEFAULT_INTEREST_RATE,
            loan_term_months: DEFAULT_LOAN_TERM_MONTHS,
            loan_points: DEFAULT_LOAN_POINTS,
            rehab_financed: false,
            rehab_loan_amount: Decimal::ZERO,
            draw_schedule: DrawSchedule::default(),
            loan_structure: LoanStructure::default(),
        }
    }
}

/// Monthly carrying costs plus the expected holding period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingCosts {
    pub monthly_taxes: Decimal,
    pub monthly_insurance: Decimal,
    pub monthly_utilities: Decimal,
    pub monthly_hoa: Decimal,
    pub lawn_care: Decimal,
    pub security: Decimal,
    pub property_management: Decimal,
    /// Expected months from purchase to resale, >= 1.
    pub holding_period_months: u32,
}

impl Default for HoldingCosts {
    fn default() -> Self {
        Self {
            monthly_taxes: Decimal::ZERO,
            monthly_insurance: Decimal::ZERO,
            monthly_utilities: Decimal::ZERO,
            monthly_hoa: Decimal::ZERO,
            lawn_care: Decimal::ZERO,
            security: Decimal::ZERO,
            property_management: Decimal::ZERO,
            holding_period_months: DEFAULT_HOLDING_PERIOD_MONTHS,
        }
    }
}

/// One-time acquisition costs, summed directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyingCosts {
    pub closing_costs: Decimal,
    pub inspection: Decimal,
    pub appraisal: Decimal,
    pub title_insurance: Decimal,
    pub survey: Decimal,
    pub attorney: Decimal,
    pub recording: Decimal,
    pub escrow: Decimal,
    pub other: Decimal,
}

/// Disposition costs. Agent commission is a percent of ARV; the rest are
/// flat dollar amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingCosts {
    pub agent_commission_percent: Decimal,
    pub closing_costs: Decimal,
    pub title_insurance: Decimal,
    pub transfer_taxes: Decimal,
    pub home_warranty: Decimal,
    pub concessions: Decimal,
    pub staging: Decimal,
    pub photography_marketing: Decimal,
    pub other: Decimal,
}

impl Default for SellingCosts {
    fn default() -> Self {
        Self {
            agent_commission_percent: DEFAULT_AGENT_COMMISSION_PERCENT,
            closing_costs: Decimal::ZERO,
            title_insurance: Decimal::ZERO,
            transfer_taxes: Decimal::ZERO,
            home_warranty: Decimal::ZERO,
            concessions: Decimal::ZERO,
            staging: Decimal::ZERO,
            photography_marketing: Decimal::ZERO,
            other: Decimal::ZERO,
        }
    }
}

/// Fully-populated input record for one analysis run.
///
/// The engine never accepts partial records: the form layer owns merging,
/// and `Default` carries the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInput {
    pub property: PropertyInfo,
    pub pricing: Pricing,
    pub rehab: RehabCategories,
    pub custom_rehab_items: Vec<CustomRehabItem>,
    pub financing: Financing,
    pub holding: HoldingCosts,
    pub buying: BuyingCosts,
    pub selling: SellingCosts,
}

/// Qualitative recommendation, first threshold match top-down on roi.
///
/// Ordered by deal quality so monotonicity in roi can be asserted directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Pass,
    Renegotiate,
    Consider,
    Buy,
    StrongBuy,
}

impl Signal {
    /// roi >= 25 STRONG BUY, >= 15 BUY, >= 10 CONSIDER, >= 0 RENEGOTIATE,
    /// otherwise PASS.
    pub fn from_roi(roi: Decimal) -> Self {
        if roi >= dec!(25) {
            Signal::StrongBuy
        } else if roi >= dec!(15) {
            Signal::Buy
        } else if roi >= dec!(10) {
            Signal::Consider
        } else if roi >= Decimal::ZERO {
            Signal::Renegotiate
        } else {
            Signal::Pass
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Signal::StrongBuy => "STRONG BUY",
            Signal::Buy => "BUY",
            Signal::Consider => "CONSIDER",
            Signal::Renegotiate => "RENEGOTIATE",
            Signal::Pass => "PASS",
        };
        write!(f, "{label}")
    }
}

/// Letter grade shown in the review panel. Same roi input as `Signal`,
/// different thresholds; the two scales are intentionally distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "B+")]
    BPlus,
    A,
}

impl Grade {
    /// roi >= 20 A, >= 15 B+, >= 10 B-, >= 5 C, >= 0 D, otherwise F.
    pub fn from_roi(roi: Decimal) -> Self {
        if roi >= dec!(20) {
            Grade::A
        } else if roi >= dec!(15) {
            Grade::BPlus
        } else if roi >= dec!(10) {
            Grade::BMinus
        } else if roi >= dec!(5) {
            Grade::C
        } else if roi >= Decimal::ZERO {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::BMinus => "B-",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{label}")
    }
}

/// Derived financial metrics for one `DealInput`.
///
/// A pure projection: recomputed on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealCalculations {
    pub total_rehab_cost: Decimal,
    pub points_cost: Decimal,
    pub total_interest: Decimal,
    pub monthly_holding: Decimal,
    pub total_holding_costs: Decimal,
    pub total_buying_costs: Decimal,
    pub agent_commission: Decimal,
    pub total_selling_costs: Decimal,
    pub total_investment: Decimal,
    pub total_profit: Decimal,
    /// Return on investment, percent. Zero when total_investment is zero.
    pub roi: Decimal,
    pub percent_of_arv: Decimal,
    /// 70% of ARV minus rehab cost. May be negative; never clamped.
    pub max_allowable_offer: Decimal,
    pub equity_at_purchase: Decimal,
    /// Cash the buyer brings to close. May be negative when over-financed.
    pub cash_needed: Decimal,
    pub arv_per_sqft: Decimal,
    pub cost_per_sqft: Decimal,
    pub profit_per_sqft: Decimal,
    /// Display-only figure from the financing panel. Honors the
    /// interest-only/amortizing toggle but never feeds the totals above.
    pub monthly_loan_payment: Decimal,
    pub signal: Signal,
    pub grade: Grade,
}

/// A saved deal: raw input only, keyed by user/session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub input: DealInput,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating or updating a saved deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    pub id: Option<String>,
    pub user_id: String,
    pub name: String,
    pub input: DealInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let input = DealInput::default();
        assert_eq!(input.holding.holding_period_months, 6);
        assert_eq!(input.selling.agent_commission_percent, dec!(6));
        assert_eq!(input.financing.loan_points, dec!(2));
        assert_eq!(input.financing.interest_rate, dec!(12));
        assert_eq!(input.pricing.purchase_price, Decimal::ZERO);
    }

    #[test]
    fn rehab_total_covers_all_buckets() {
        let mut rehab = RehabCategories::default();
        rehab.demolition = dec!(1000);
        rehab.miscellaneous = dec!(250);
        assert_eq!(rehab.total(), dec!(1250));
        assert_eq!(rehab.entries().len(), 33);
    }

    #[test]
    fn signal_thresholds_first_match_wins() {
        assert_eq!(Signal::from_roi(dec!(25)), Signal::StrongBuy);
        assert_eq!(Signal::from_roi(dec!(24.99)), Signal::Buy);
        assert_eq!(Signal::from_roi(dec!(15)), Signal::Buy);
        assert_eq!(Signal::from_roi(dec!(10)), Signal::Consider);
        assert_eq!(Signal::from_roi(dec!(0)), Signal::Renegotiate);
        assert_eq!(Signal::from_roi(dec!(-0.01)), Signal::Pass);
    }

    #[test]
    fn grade_thresholds_are_distinct_from_signal() {
        assert_eq!(Grade::from_roi(dec!(20)), Grade::A);
        assert_eq!(Grade::from_roi(dec!(19.99)), Grade::BPlus);
        assert_eq!(Grade::from_roi(dec!(10)), Grade::BMinus);
        assert_eq!(Grade::from_roi(dec!(5)), Grade::C);
        assert_eq!(Grade::from_roi(dec!(0)), Grade::D);
        assert_eq!(Grade::from_roi(dec!(-5)), Grade::F);
    }

    #[test]
    fn signal_orders_by_deal_quality() {
        assert!(Signal::Pass < Signal::Renegotiate);
        assert!(Signal::Renegotiate < Signal::Consider);
        assert!(Signal::Consider < Signal::Buy);
        assert!(Signal::Buy < Signal::StrongBuy);
    }

    #[test]
    fn deal_input_round_trips_through_json() {
        let mut input = DealInput::default();
        input.pricing.arv = dec!(275000);
        input.custom_rehab_items.push(CustomRehabItem {
            id: "c1".to_string(),
            name: "Sewer line".to_string(),
            cost: dec!(4500),
        });
        let json = serde_json::to_string(&input).unwrap();
        let back: DealInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}
