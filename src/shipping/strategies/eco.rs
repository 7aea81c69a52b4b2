//! Eco shipping: cheap and slow, with a discount for bulk orders

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::value_objects::{
    format_exact, format_measure, format_rate, round_whole, within_range,
};
use crate::shipping::params::{amount_or, fraction_or, parse_overrides};
use crate::shipping::strategies::shown_fee;
use crate::shipping::{OrderContext, ShippingStrategy};
use crate::Result;

const STRATEGY: &str = "ECO";
const NAME: &str = "Eco Shipping";

#[derive(Clone, Debug, PartialEq)]
pub struct EcoParams {
    pub base_fee: Decimal,
    pub per_kg_fee: Decimal,
    /// Inclusive, in kg.
    pub bulk_weight_threshold: Decimal,
    /// Fraction taken off the whole fee, `0..=1`.
    pub bulk_discount: Decimal,
}

impl Default for EcoParams {
    fn default() -> Self {
        Self {
            base_fee: Decimal::new(15000, 0),
            per_kg_fee: Decimal::new(3000, 0),
            bulk_weight_threshold: Decimal::TEN,
            bulk_discount: Decimal::new(15, 2),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Overrides {
    #[serde(alias = "baseFee")]
    base_fee: Option<Decimal>,
    #[serde(alias = "perKgFee")]
    per_kg_fee: Option<Decimal>,
    #[serde(alias = "bulkWeightThreshold")]
    bulk_weight_threshold: Option<Decimal>,
    #[serde(alias = "bulkDiscount")]
    bulk_discount: Option<Decimal>,
}

impl EcoParams {
    pub fn from_json(blob: &str) -> Self {
        let o: Overrides = parse_overrides(STRATEGY, blob);
        let d = Self::default();
        Self {
            base_fee: amount_or(STRATEGY, "BaseFee", o.base_fee, d.base_fee),
            per_kg_fee: amount_or(STRATEGY, "PerKgFee", o.per_kg_fee, d.per_kg_fee),
            bulk_weight_threshold: amount_or(
                STRATEGY,
                "BulkWeightThreshold",
                o.bulk_weight_threshold,
                d.bulk_weight_threshold,
            ),
            bulk_discount: fraction_or(STRATEGY, "BulkDiscount", o.bulk_discount, d.bulk_discount),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct EcoShippingStrategy {
    params: EcoParams,
}

impl EcoShippingStrategy {
    pub fn new(params: EcoParams) -> Self { Self { params } }
    pub fn from_json(blob: &str) -> Self { Self::new(EcoParams::from_json(blob)) }
    pub fn params(&self) -> &EcoParams { &self.params }

    pub fn is_bulk(&self, ctx: &OrderContext) -> bool {
        ctx.weight_kg() >= self.params.bulk_weight_threshold
    }

    fn fee(&self, ctx: &OrderContext) -> Result<Decimal> {
        let p = &self.params;
        let mut raw = p.per_kg_fee.checked_mul(ctx.weight_kg()).and_then(|v| v.checked_add(p.base_fee));
        if self.is_bulk(ctx) {
            raw = raw.and_then(|v| v.checked_mul(Decimal::ONE - p.bulk_discount));
        }
        within_range(NAME, raw).map(round_whole)
    }
}

impl ShippingStrategy for EcoShippingStrategy {
    fn name(&self) -> String {
        NAME.to_string()
    }

    fn calculate(&self, ctx: &OrderContext) -> Result<Decimal> {
        self.fee(ctx)
    }

    fn explain(&self, ctx: &OrderContext) -> String {
        let base = format!(
            "Base({}) + PerKg({}) × Weight({}kg)",
            format_exact(self.params.base_fee, 0),
            format_exact(self.params.per_kg_fee, 0),
            format_measure(ctx.weight_kg()),
        );
        let fee = shown_fee(self.fee(ctx));
        if self.is_bulk(ctx) {
            format!(
                "Eco Shipping [bulk ≥ {}kg]: ({base}) × (1 - BulkDiscount({})) = {fee}",
                format_measure(self.params.bulk_weight_threshold),
                format_rate(self.params.bulk_discount),
            )
        } else {
            format!("Eco Shipping: {base} = {fee}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx(weight: f64) -> OrderContext {
        let time = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        OrderContext::new(weight, 0.0, time).unwrap()
    }

    #[test]
    fn test_below_threshold() {
        let fee = EcoShippingStrategy::default().calculate(&ctx(5.0)).unwrap();
        assert_eq!(fee, Decimal::new(30000, 0));
    }

    #[test]
    fn test_bulk_discount() {
        let fee = EcoShippingStrategy::default().calculate(&ctx(12.0)).unwrap();
        assert_eq!(fee, Decimal::new(43350, 0));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let strategy = EcoShippingStrategy::default();
        assert_eq!(strategy.calculate(&ctx(10.0)).unwrap(), Decimal::new(38250, 0));
        assert_eq!(strategy.calculate(&ctx(9.999)).unwrap(), Decimal::new(44997, 0));
        assert_eq!(strategy.calculate(&ctx(9.9)).unwrap(), Decimal::new(44700, 0));
        assert_eq!(strategy.calculate(&ctx(10.1)).unwrap(), Decimal::new(38505, 0));
    }

    #[test]
    fn test_explain() {
        let strategy = EcoShippingStrategy::default();
        assert_eq!(
            strategy.explain(&ctx(12.0)),
            "Eco Shipping [bulk ≥ 10.00kg]: (Base(15,000) + PerKg(3,000) × Weight(12.00kg)) × (1 - BulkDiscount(0.15)) = 43,350"
        );
        assert_eq!(
            strategy.explain(&ctx(5.0)),
            "Eco Shipping: Base(15,000) + PerKg(3,000) × Weight(5.00kg) = 30,000"
        );
    }

    #[test]
    fn test_discount_outside_unit_interval_falls_back() {
        assert_eq!(EcoParams::from_json(r#"{"BulkDiscount": 1.5}"#).bulk_discount, Decimal::new(15, 2));
        assert_eq!(EcoParams::from_json(r#"{"bulkDiscount": 0.5}"#).bulk_discount, Decimal::new(5, 1));
    }
}
