//! Presentation helpers for amounts: the single rounding rule and
//! grouped currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> String {
        symbol_for(self.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("JPY")
    }
}

/// Rounds to the nearest whole currency unit, ties to even.
///
/// Aggregates always sum exact values; this is applied to outputs only.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

/// Formats a whole number with `,` grouping, e.g. `-1,234,567`.
pub fn format_number(value: Decimal) -> String {
    let rounded = round_currency(value);
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_digits(&digits, ',');
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Formats an amount as `¥1,234` / `-¥500`, rounded to whole units.
pub fn format_currency_value(amount: Decimal, code: &CurrencyCode) -> String {
    let body = format_number(amount.abs());
    let negative = round_currency(amount) < Decimal::ZERO;
    if negative {
        format!("-{}{}", code.symbol(), body)
    } else {
        format!("{}{}", code.symbol(), body)
    }
}

/// Renders a ratio (0.25) as a one-decimal percentage (`25.0%`).
pub fn format_percent(ratio: Decimal) -> String {
    let percent = (ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_applies_ties_to_even() {
        assert_eq!(round_currency(Decimal::new(25, 1)), Decimal::from(2));
        assert_eq!(round_currency(Decimal::new(35, 1)), Decimal::from(4));
        assert_eq!(round_currency(Decimal::new(-15, 1)), Decimal::from(-2));
        assert_eq!(round_currency(Decimal::new(1249, 1)), Decimal::from(125));
    }

    #[test]
    fn currency_formatting_groups_digits() {
        let yen = CurrencyCode::default();
        assert_eq!(format_currency_value(Decimal::from(1234567), &yen), "¥1,234,567");
        assert_eq!(format_currency_value(Decimal::from(-500), &yen), "-¥500");
        assert_eq!(format_currency_value(Decimal::ZERO, &yen), "¥0");
        assert_eq!(format_currency_value(Decimal::new(9996, 1), &yen), "¥1,000");
        let usd = CurrencyCode::new("usd");
        assert_eq!(format_currency_value(Decimal::from(42), &usd), "$42");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(Decimal::new(25, 2)), "25.0%");
        assert_eq!(format_percent(Decimal::new(-1, 0)), "-100.0%");
        assert_eq!(format_percent(Decimal::new(1234, 4)), "12.3%");
    }
}
