//! Value Objects for shipping fee calculation

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{Result, ShippingError};

/// Rounds a strategy fee to whole currency units (banker's rounding).
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a surcharge increment to cents (banker's rounding).
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Converts a measured quantity (kg, km) to a decimal using its shortest representation.
/// `None` when the value is not finite or does not fit in a `Decimal`.
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse::<Decimal>().ok().or_else(|| Decimal::from_f64(value))
}

/// Formats an amount with `dp` decimals and comma thousands separators: `1234567.5 -> "1,234,567.50"`.
pub fn format_amount(amount: Decimal, dp: u32) -> String {
    let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
    let plain = format!("{:.*}", dp as usize, rounded);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a configured amount without losing precision, with at least `min_dp` decimals:
/// `(20000, 0) -> "20,000"`, `(20000.5, 0) -> "20,000.5"`, `(1.125, 2) -> "1.125"`.
pub fn format_exact(amount: Decimal, min_dp: u32) -> String {
    let exact = amount.normalize();
    format_amount(exact, exact.scale().max(min_dp))
}

/// Formats a measured input exactly, padded to at least two decimals: `2 -> "2.00"`, `2.345 -> "2.345"`.
pub fn format_measure(value: Decimal) -> String {
    let exact = value.normalize();
    if exact.scale() < 2 {
        format!("{exact:.2}")
    } else {
        exact.to_string()
    }
}

/// Formats a rate or multiplier without trailing zeros: `1.20 -> "1.2"`.
pub fn format_rate(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Turns an overflowed checked computation into `FeeOutOfRange` for `component`.
pub fn within_range(component: &str, amount: Option<Decimal>) -> Result<Decimal> {
    amount.ok_or_else(|| ShippingError::FeeOutOfRange(component.to_string()))
}
