//! Plain-text deal worksheet export.
//!
//! Formats a `DealInput` and its computed `DealCalculations` for download.
//! Strictly a consumer of engine output; nothing here recomputes a formula.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::deals::deal_model::{DealCalculations, DealInput};

/// Renders the worksheet as plain text.
pub fn render_worksheet(input: &DealInput, calc: &DealCalculations) -> String {
    let mut out = String::new();
    let line = "=".repeat(58);

    out.push_str(&line);
    out.push_str("\nDEAL ANALYSIS WORKSHEET\n");
    out.push_str(&format!("{}\n\n", input.property.full_address()));

    out.push_str("PRICING\n");
    push_row(&mut out, "Asking price", money(input.pricing.asking_price));
    push_row(&mut out, "Purchase price", money(input.pricing.purchase_price));
    push_row(&mut out, "After-repair value", money(input.pricing.arv));
    push_row(&mut out, "Percent of ARV", percent(calc.percent_of_arv));
    out.push('\n');

    out.push_str("REHAB\n");
    for (label, amount) in input.rehab.entries() {
        if amount > Decimal::ZERO {
            push_row(&mut out, label, money(amount));
        }
    }
    for item in &input.custom_rehab_items {
        push_row(&mut out, &item.name, money(item.cost));
    }
    push_row(&mut out, "Total rehab", money(calc.total_rehab_cost));
    out.push('\n');

    out.push_str("FINANCING\n");
    push_row(&mut out, "Loan amount", money(input.financing.loan_amount));
    push_row(&mut out, "Points cost", money(calc.points_cost));
    push_row(&mut out, "Total interest", money(calc.total_interest));
    push_row(
        &mut out,
        "Monthly payment (display)",
        money(calc.monthly_loan_payment),
    );
    out.push('\n');

    out.push_str("COSTS\n");
    push_row(&mut out, "Buying costs", money(calc.total_buying_costs));
    push_row(
        &mut out,
        &format!(
            "Holding costs ({} mo)",
            input.holding.holding_period_months
        ),
        money(calc.total_holding_costs),
    );
    push_row(&mut out, "Agent commission", money(calc.agent_commission));
    push_row(&mut out, "Selling costs", money(calc.total_selling_costs));
    out.push('\n');

    out.push_str("RESULTS\n");
    push_row(&mut out, "Total investment", money(calc.total_investment));
    push_row(&mut out, "Total profit", money(calc.total_profit));
    push_row(&mut out, "ROI", percent(calc.roi));
    push_row(&mut out, "Max allowable offer", money(calc.max_allowable_offer));
    push_row(&mut out, "Equity at purchase", money(calc.equity_at_purchase));
    push_row(&mut out, "Cash needed", money(calc.cash_needed));
    if input.property.square_footage > Decimal::ZERO {
        push_row(&mut out, "ARV / sqft", money(calc.arv_per_sqft));
        push_row(&mut out, "Cost / sqft", money(calc.cost_per_sqft));
        push_row(&mut out, "Profit / sqft", money(calc.profit_per_sqft));
    }
    out.push('\n');
    push_row(&mut out, "Signal", calc.signal.to_string());
    push_row(&mut out, "Grade", calc.grade.to_string());
    out.push_str(&line);
    out.push('\n');

    out
}

fn push_row(out: &mut String, label: &str, value: String) {
    out.push_str(&format!("  {label:<34}{value:>20}\n"));
}

/// `$1,234.56` formatting; negatives render as `-$1,234.56`.
fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (text, "00".to_string()),
    };
    let mut grouped = String::new();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

fn percent(value: Decimal) -> String {
    // normalize() drops trailing zeros so whole percents print as "25%"
    format!("{}%", value.round_dp(DISPLAY_DECIMAL_PRECISION).normalize())
}
