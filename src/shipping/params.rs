//! Parameter blob parsing shared by the strategies.
//!
//! Every strategy reads its configuration the same way: parse the blob into an
//! overrides shape where each field is optional, then merge field by field onto
//! the documented defaults. A blob that does not parse, or a field that is out of
//! range, falls back to the default. Nothing here ever fails the caller.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

/// Parses `blob` into `T`, yielding `T::default()` (all fields absent) when the blob is
/// empty or malformed.
pub(crate) fn parse_overrides<T>(strategy: &'static str, blob: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let blob = blob.trim();
    if blob.is_empty() {
        return T::default();
    }
    match serde_json::from_str::<T>(blob) {
        Ok(overrides) => overrides,
        Err(err) => {
            tracing::warn!(strategy, error = %err, "malformed shipping parameters, using defaults");
            T::default()
        }
    }
}

/// Keeps a configured amount when it is non-negative.
pub(crate) fn amount_or(
    strategy: &'static str,
    field: &'static str,
    value: Option<Decimal>,
    default: Decimal,
) -> Decimal {
    accept(strategy, field, value, default, |v| *v >= Decimal::ZERO)
}

/// Keeps a configured fraction when it lies in `[0, 1]`.
pub(crate) fn fraction_or(
    strategy: &'static str,
    field: &'static str,
    value: Option<Decimal>,
    default: Decimal,
) -> Decimal {
    accept(strategy, field, value, default, |v| *v >= Decimal::ZERO && *v <= Decimal::ONE)
}

pub(crate) fn accept<T: std::fmt::Debug>(
    strategy: &'static str,
    field: &'static str,
    value: Option<T>,
    default: T,
    valid: impl FnOnce(&T) -> bool,
) -> T {
    match value {
        Some(v) if valid(&v) => v,
        Some(v) => {
            tracing::warn!(strategy, field, value = ?v, "shipping parameter out of range, using default");
            default
        }
        None => default,
    }
}
