//! Express shipping: `base * multiplier + perKg * weight (+ surge in peak hours)`

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::value_objects::{
    format_exact, format_measure, format_rate, round_whole, within_range,
};
use crate::shipping::params::{amount_or, parse_overrides};
use crate::shipping::strategies::shown_fee;
use crate::shipping::{OrderContext, ShippingStrategy};
use crate::Result;

const STRATEGY: &str = "EXPRESS";
const NAME: &str = "Express Shipping";

/// Morning and evening rush windows, half-open `[start, end)`.
const PEAK_WINDOWS: [(u32, u32); 2] = [(7, 9), (17, 19)];

#[derive(Clone, Debug, PartialEq)]
pub struct ExpressParams {
    pub base_fee: Decimal,
    pub base_multiplier: Decimal,
    pub per_kg_fee: Decimal,
    pub peak_hour_surge: Decimal,
}

impl Default for ExpressParams {
    fn default() -> Self {
        Self {
            base_fee: Decimal::new(30000, 0),
            base_multiplier: Decimal::new(12, 1),
            per_kg_fee: Decimal::new(8000, 0),
            peak_hour_surge: Decimal::new(15000, 0),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Overrides {
    #[serde(alias = "baseFee")]
    base_fee: Option<Decimal>,
    #[serde(alias = "baseMultiplier")]
    base_multiplier: Option<Decimal>,
    #[serde(alias = "perKgFee")]
    per_kg_fee: Option<Decimal>,
    #[serde(alias = "peakHourSurge")]
    peak_hour_surge: Option<Decimal>,
}

impl ExpressParams {
    pub fn from_json(blob: &str) -> Self {
        let o: Overrides = parse_overrides(STRATEGY, blob);
        let d = Self::default();
        Self {
            base_fee: amount_or(STRATEGY, "BaseFee", o.base_fee, d.base_fee),
            base_multiplier: amount_or(STRATEGY, "BaseMultiplier", o.base_multiplier, d.base_multiplier),
            per_kg_fee: amount_or(STRATEGY, "PerKgFee", o.per_kg_fee, d.per_kg_fee),
            peak_hour_surge: amount_or(STRATEGY, "PeakHourSurge", o.peak_hour_surge, d.peak_hour_surge),
        }
    }
}

pub fn is_peak_hour(hour: u32) -> bool {
    PEAK_WINDOWS.iter().any(|&(start, end)| (start..end).contains(&hour))
}

#[derive(Clone, Debug, Default)]
pub struct ExpressShippingStrategy {
    params: ExpressParams,
}

impl ExpressShippingStrategy {
    pub fn new(params: ExpressParams) -> Self { Self { params } }
    pub fn from_json(blob: &str) -> Self { Self::new(ExpressParams::from_json(blob)) }
    pub fn params(&self) -> &ExpressParams { &self.params }

    fn surge(&self, ctx: &OrderContext) -> Option<Decimal> {
        is_peak_hour(ctx.hour()).then_some(self.params.peak_hour_surge)
    }

    fn fee(&self, ctx: &OrderContext) -> Result<Decimal> {
        let p = &self.params;
        let raw = p.base_fee.checked_mul(p.base_multiplier).and_then(|base| {
            p.per_kg_fee
                .checked_mul(ctx.weight_kg())
                .and_then(|v| v.checked_add(base))
                .and_then(|v| v.checked_add(self.surge(ctx).unwrap_or(Decimal::ZERO)))
        });
        within_range(NAME, raw).map(round_whole)
    }
}

impl ShippingStrategy for ExpressShippingStrategy {
    fn name(&self) -> String {
        NAME.to_string()
    }

    fn calculate(&self, ctx: &OrderContext) -> Result<Decimal> {
        self.fee(ctx)
    }

    fn explain(&self, ctx: &OrderContext) -> String {
        let surge = self
            .surge(ctx)
            .map(|s| format!(" + PeakHourSurge({})", format_exact(s, 0)))
            .unwrap_or_default();
        format!(
            "Express Shipping: Base({}) × {} + PerKg({}) × Weight({}kg){} = {}",
            format_exact(self.params.base_fee, 0),
            format_rate(self.params.base_multiplier),
            format_exact(self.params.per_kg_fee, 0),
            format_measure(ctx.weight_kg()),
            surge,
            shown_fee(self.fee(ctx)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx(weight: f64, hour: u32) -> OrderContext {
        let time = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(hour, 0, 0).unwrap();
        OrderContext::new(weight, 0.0, time).unwrap()
    }

    #[test]
    fn test_off_peak_fee() {
        let fee = ExpressShippingStrategy::default().calculate(&ctx(2.0, 10)).unwrap();
        assert_eq!(fee, Decimal::new(52000, 0));
    }

    #[test]
    fn test_peak_surge() {
        let fee = ExpressShippingStrategy::default().calculate(&ctx(2.0, 8)).unwrap();
        assert_eq!(fee, Decimal::new(67000, 0));
    }

    #[test]
    fn test_peak_windows_are_half_open() {
        assert!(!is_peak_hour(6));
        assert!(is_peak_hour(7));
        assert!(is_peak_hour(8));
        assert!(!is_peak_hour(9));
        assert!(!is_peak_hour(16));
        assert!(is_peak_hour(17));
        assert!(is_peak_hour(18));
        assert!(!is_peak_hour(19));
    }

    #[test]
    fn test_explain_shows_surge_only_at_peak() {
        let strategy = ExpressShippingStrategy::default();
        assert_eq!(
            strategy.explain(&ctx(2.0, 8)),
            "Express Shipping: Base(30,000) × 1.2 + PerKg(8,000) × Weight(2.00kg) + PeakHourSurge(15,000) = 67,000"
        );
        assert_eq!(
            strategy.explain(&ctx(2.0, 19)),
            "Express Shipping: Base(30,000) × 1.2 + PerKg(8,000) × Weight(2.00kg) = 52,000"
        );
    }

    #[test]
    fn test_malformed_params_use_defaults() {
        let strategy = ExpressShippingStrategy::from_json(r#"{"BaseFee": "lots""#);
        assert_eq!(strategy.params(), &ExpressParams::default());
    }
}
