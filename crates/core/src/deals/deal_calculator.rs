//! The deal valuation engine.
//!
//! `evaluate` maps a `DealInput` to its derived metrics and recommendation
//! signal. It is pure and total: no input satisfying the non-negativity
//! constraints can panic, and every degenerate division is guarded to
//! produce zero. Downstream display and export code has no further
//! NaN handling, so the guards here are a hard contract.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::constants::MAO_ARV_RATIO;
use crate::deals::deal_model::{
    BuyingCosts, DealCalculations, DealInput, Financing, Grade, HoldingCosts, LoanStructure,
    SellingCosts, Signal,
};

const HUNDRED: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Evaluates a deal. Deterministic and side-effect free; calling it twice
/// with identical input yields identical output.
pub fn evaluate(input: &DealInput) -> DealCalculations {
    let arv = input.pricing.arv;
    let purchase_price = input.pricing.purchase_price;
    let loan_amount = input.financing.loan_amount;
    let sqft = input.property.square_footage;

    let total_rehab_cost = total_rehab_cost(input);

    let points_cost = loan_amount * input.financing.loan_points / HUNDRED;
    let monthly_interest_rate = input.financing.interest_rate / HUNDRED / MONTHS_PER_YEAR;
    // Interest-only aggregate model. The amortizing toggle affects only the
    // displayed monthly payment, never the totals.
    let total_interest =
        loan_amount * monthly_interest_rate * Decimal::from(input.financing.loan_term_months);

    let monthly_holding = monthly_holding(&input.holding);
    let total_holding_costs =
        monthly_holding * Decimal::from(input.holding.holding_period_months);

    let total_buying_costs = total_buying_costs(&input.buying);

    let agent_commission = arv * input.selling.agent_commission_percent / HUNDRED;
    let total_selling_costs = agent_commission + flat_selling_costs(&input.selling);

    let total_investment = purchase_price
        + total_rehab_cost
        + total_buying_costs
        + total_holding_costs
        + points_cost
        + total_interest;

    let total_profit = arv - total_investment - total_selling_costs;

    let roi = if total_investment > Decimal::ZERO {
        total_profit / total_investment * HUNDRED
    } else {
        Decimal::ZERO
    };

    let percent_of_arv = if arv > Decimal::ZERO {
        purchase_price / arv * HUNDRED
    } else {
        Decimal::ZERO
    };

    let max_allowable_offer = arv * MAO_ARV_RATIO - total_rehab_cost;
    let equity_at_purchase = arv - purchase_price - total_rehab_cost;
    let cash_needed = purchase_price + total_rehab_cost + total_buying_costs - loan_amount;

    let (arv_per_sqft, cost_per_sqft, profit_per_sqft) = if sqft > Decimal::ZERO {
        (
            arv / sqft,
            (purchase_price + total_rehab_cost) / sqft,
            total_profit / sqft,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    };

    DealCalculations {
        total_rehab_cost,
        points_cost,
        total_interest,
        monthly_holding,
        total_holding_costs,
        total_buying_costs,
        agent_commission,
        total_selling_costs,
        total_investment,
        total_profit,
        roi,
        percent_of_arv,
        max_allowable_offer,
        equity_at_purchase,
        cash_needed,
        arv_per_sqft,
        cost_per_sqft,
        profit_per_sqft,
        monthly_loan_payment: monthly_loan_payment(&input.financing),
        signal: Signal::from_roi(roi),
        grade: Grade::from_roi(roi),
    }
}

/// Sum of the 33 fixed buckets plus all custom line items.
pub fn total_rehab_cost(input: &DealInput) -> Decimal {
    input.rehab.total()
        + input
            .custom_rehab_items
            .iter()
            .map(|item| item.cost)
            .sum::<Decimal>()
}

fn monthly_holding(holding: &HoldingCosts) -> Decimal {
    holding.monthly_taxes
        + holding.monthly_insurance
        + holding.monthly_utilities
        + holding.monthly_hoa
        + holding.lawn_care
        + holding.security
        + holding.property_management
}

fn total_buying_costs(buying: &BuyingCosts) -> Decimal {
    buying.closing_costs
        + buying.inspection
        + buying.appraisal
        + buying.title_insurance
        + buying.survey
        + buying.attorney
        + buying.recording
        + buying.escrow
        + buying.other
}

fn flat_selling_costs(selling: &SellingCosts) -> Decimal {
    selling.closing_costs
        + selling.title_insurance
        + selling.transfer_taxes
        + selling.home_warranty
        + selling.concessions
        + selling.staging
        + selling.photography_marketing
        + selling.other
}

/// Monthly payment for the financing panel display.
///
/// Interest-only: principal x monthly rate. Amortizing: standard annuity
/// payment over the loan term. Non-authoritative; `evaluate` never uses it.
pub fn monthly_loan_payment(financing: &Financing) -> Decimal {
    let principal = financing.loan_amount;
    let term = financing.loan_term_months;
    if principal <= Decimal::ZERO || term == 0 {
        return Decimal::ZERO;
    }
    let monthly_rate = financing.interest_rate / HUNDRED / MONTHS_PER_YEAR;
    match financing.loan_structure {
        LoanStructure::InterestOnly => principal * monthly_rate,
        LoanStructure::Amortizing => {
            if monthly_rate == Decimal::ZERO {
                return principal / Decimal::from(term);
            }
            let factor = (Decimal::ONE + monthly_rate).powi(i64::from(term));
            principal * monthly_rate * factor / (factor - Decimal::ONE)
        }
    }
}
