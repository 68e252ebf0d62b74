//! Form-field normalization.
//!
//! The data-entry form sends currency fields as free text; this is the
//! single place they are normalized before the engine sees them. The engine
//! never receives a non-numeric value.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid regex"));

/// Parses a currency field by stripping every non-digit character.
/// Unparsable or empty input falls back to zero.
pub fn parse_currency(raw: &str) -> Decimal {
    let digits = NON_DIGITS.replace_all(raw, "");
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&digits).unwrap_or(Decimal::ZERO)
}

/// Parses a percentage field as a decimal number, with or without a
/// trailing `%`. Unparsable input falls back to zero.
pub fn parse_percent(raw: &str) -> Decimal {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    Decimal::from_str(trimmed).unwrap_or(Decimal::ZERO)
}
