//! Property-based tests for the deal valuation engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use cookincapital_core::deals::{
    evaluate, CustomRehabItem, DealInput, Signal,
};

// =============================================================================
// Generators
// =============================================================================

/// Generates a dollar amount in whole dollars, 0..=1,000,000.
fn arb_dollars() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000).prop_map(Decimal::from)
}

/// Generates a percentage 0..=30 with two decimal places.
fn arb_percent() -> impl Strategy<Value = Decimal> {
    (0i64..=3000).prop_map(|basis| Decimal::new(basis, 2))
}

/// Generates a custom rehab item with a non-negative cost.
fn arb_custom_item() -> impl Strategy<Value = CustomRehabItem> {
    ("[a-z]{3,12}", 0i64..=50_000).prop_map(|(name, cost)| CustomRehabItem {
        id: format!("custom-{name}"),
        name,
        cost: Decimal::from(cost),
    })
}

/// Generates a populated deal input. Only a representative subset of the 33
/// rehab buckets varies; the additivity property covers the rest explicitly.
fn arb_deal_input() -> impl Strategy<Value = DealInput> {
    (
        arb_dollars(), // purchase price
        arb_dollars(), // arv
        arb_dollars(), // loan amount
        arb_percent(), // interest rate
        arb_percent(), // points
        1u32..=24,     // holding period
        arb_dollars(), // roofing bucket
        arb_dollars(), // flooring bucket
        (0i64..=5000).prop_map(Decimal::from), // monthly taxes
        (0i64..=10_000).prop_map(Decimal::from), // square footage
        proptest::collection::vec(arb_custom_item(), 0..5),
    )
        .prop_map(
            |(
                purchase_price,
                arv,
                loan_amount,
                interest_rate,
                loan_points,
                holding_period_months,
                roofing,
                flooring,
                monthly_taxes,
                square_footage,
                custom_rehab_items,
            )| {
                let mut input = DealInput::default();
                input.pricing.purchase_price = purchase_price;
                input.pricing.arv = arv;
                input.financing.loan_amount = loan_amount;
                input.financing.interest_rate = interest_rate;
                input.financing.loan_points = loan_points;
                input.holding.holding_period_months = holding_period_months;
                input.rehab.roofing = roofing;
                input.rehab.flooring = flooring;
                input.holding.monthly_taxes = monthly_taxes;
                input.property.square_footage = square_footage;
                input.custom_rehab_items = custom_rehab_items;
                input
            },
        )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Evaluating the same input twice returns identical output.
    #[test]
    fn prop_evaluation_is_deterministic(input in arb_deal_input()) {
        let first = evaluate(&input);
        let second = evaluate(&input);
        prop_assert_eq!(first, second);
    }

    /// Zero ARV forces the ARV-divided fields to zero and nothing panics;
    /// every other field stays a plain arithmetic result.
    #[test]
    fn prop_zero_arv_is_guarded(mut input in arb_deal_input()) {
        input.pricing.arv = Decimal::ZERO;
        let calc = evaluate(&input);
        prop_assert_eq!(calc.percent_of_arv, Decimal::ZERO);
        if input.property.square_footage > Decimal::ZERO {
            prop_assert_eq!(calc.arv_per_sqft, Decimal::ZERO);
        }
    }

    /// Zero square footage forces all per-sqft metrics to zero.
    #[test]
    fn prop_zero_sqft_is_guarded(mut input in arb_deal_input()) {
        input.property.square_footage = Decimal::ZERO;
        let calc = evaluate(&input);
        prop_assert_eq!(calc.arv_per_sqft, Decimal::ZERO);
        prop_assert_eq!(calc.cost_per_sqft, Decimal::ZERO);
        prop_assert_eq!(calc.profit_per_sqft, Decimal::ZERO);
    }

    /// Changing one rehab bucket by delta changes total_rehab_cost by
    /// exactly delta and nothing else about the rehab sum.
    #[test]
    fn prop_rehab_total_is_additive(
        input in arb_deal_input(),
        delta in 1i64..=100_000,
    ) {
        let base = evaluate(&input);

        let mut bumped = input.clone();
        bumped.rehab.drywall += Decimal::from(delta);
        let after = evaluate(&bumped);

        prop_assert_eq!(
            after.total_rehab_cost - base.total_rehab_cost,
            Decimal::from(delta)
        );
    }

    /// For a fixed positive investment, a higher ARV never produces a worse
    /// signal. Selling costs are held flat (zero commission) so raising ARV
    /// raises profit, hence roi, monotonically.
    #[test]
    fn prop_signal_is_monotonic_in_arv(
        mut input in arb_deal_input(),
        bump in 1i64..=500_000,
    ) {
        input.selling.agent_commission_percent = Decimal::ZERO;
        input.pricing.purchase_price = dec!(50000); // keep investment > 0
        let before = evaluate(&input);

        let mut raised = input.clone();
        raised.pricing.arv += Decimal::from(bump);
        let after = evaluate(&raised);

        prop_assert!(after.roi >= before.roi);
        prop_assert!(after.signal >= before.signal);
    }

    /// total_profit always reconciles with its parts.
    #[test]
    fn prop_profit_reconciles(input in arb_deal_input()) {
        let calc = evaluate(&input);
        prop_assert_eq!(
            calc.total_profit,
            input.pricing.arv - calc.total_investment - calc.total_selling_costs
        );
    }

    /// Signal and roi agree with the documented thresholds.
    #[test]
    fn prop_signal_matches_roi_thresholds(input in arb_deal_input()) {
        let calc = evaluate(&input);
        let expected = if calc.roi >= dec!(25) {
            Signal::StrongBuy
        } else if calc.roi >= dec!(15) {
            Signal::Buy
        } else if calc.roi >= dec!(10) {
            Signal::Consider
        } else if calc.roi >= Decimal::ZERO {
            Signal::Renegotiate
        } else {
            Signal::Pass
        };
        prop_assert_eq!(calc.signal, expected);
    }
}
