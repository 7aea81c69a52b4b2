//! Standard shipping: `(base + perKg * weight) * regionFactor`

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::value_objects::{format_exact, format_measure, round_whole, within_range};
use crate::shipping::params::{accept, amount_or, parse_overrides};
use crate::shipping::strategies::shown_fee;
use crate::shipping::{OrderContext, ShippingStrategy};
use crate::Result;

const STRATEGY: &str = "STANDARD";
const NAME: &str = "Standard Shipping";

#[derive(Clone, Debug, PartialEq)]
pub struct StandardParams {
    pub base_fee: Decimal,
    pub per_kg_fee: Decimal,
    pub region_factors: HashMap<String, Decimal>,
}

impl Default for StandardParams {
    fn default() -> Self {
        Self {
            base_fee: Decimal::new(20000, 0),
            per_kg_fee: Decimal::new(5000, 0),
            region_factors: HashMap::from([
                ("North".to_string(), Decimal::new(10, 1)),
                ("Central".to_string(), Decimal::new(12, 1)),
                ("South".to_string(), Decimal::new(15, 1)),
            ]),
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
    #[serde(alias = "regionFactors")]
    region_factors: Option<HashMap<String, Decimal>>,
}

impl StandardParams {
    pub fn from_json(blob: &str) -> Self {
        let overrides: Overrides = parse_overrides(STRATEGY, blob);
        let defaults = Self::default();
        Self {
            base_fee: amount_or(STRATEGY, "BaseFee", overrides.base_fee, defaults.base_fee),
            per_kg_fee: amount_or(STRATEGY, "PerKgFee", overrides.per_kg_fee, defaults.per_kg_fee),
            region_factors: accept(
                STRATEGY,
                "RegionFactors",
                overrides.region_factors,
                defaults.region_factors,
                |factors| !factors.is_empty() && factors.values().all(|f| *f >= Decimal::ZERO),
            ),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StandardShippingStrategy {
    params: StandardParams,
}

impl StandardShippingStrategy {
    pub fn new(params: StandardParams) -> Self { Self { params } }
    pub fn from_json(blob: &str) -> Self { Self::new(StandardParams::from_json(blob)) }
    pub fn params(&self) -> &StandardParams { &self.params }

    /// Unknown or absent regions are priced neutrally.
    fn region_factor(&self, ctx: &OrderContext) -> Decimal {
        ctx.region()
            .and_then(|r| self.params.region_factors.get(r))
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    fn fee(&self, ctx: &OrderContext) -> Result<Decimal> {
        let p = &self.params;
        let raw = p
            .per_kg_fee
            .checked_mul(ctx.weight_kg())
            .and_then(|v| v.checked_add(p.base_fee))
            .and_then(|v| v.checked_mul(self.region_factor(ctx)));
        within_range(NAME, raw).map(round_whole)
    }
}

impl ShippingStrategy for StandardShippingStrategy {
    fn name(&self) -> String {
        NAME.to_string()
    }

    fn calculate(&self, ctx: &OrderContext) -> Result<Decimal> {
        self.fee(ctx)
    }

    fn explain(&self, ctx: &OrderContext) -> String {
        format!(
            "Standard Shipping: (Base({}) + PerKg({}) × Weight({}kg)) × RegionFactor[{}]({}) = {}",
            format_exact(self.params.base_fee, 0),
            format_exact(self.params.per_kg_fee, 0),
            format_measure(ctx.weight_kg()),
            ctx.region().unwrap_or("-"),
            format_exact(self.region_factor(ctx), 2),
            shown_fee(self.fee(ctx)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShippingError;
    use chrono::NaiveDate;

    fn ctx(weight: f64, region: &str) -> OrderContext {
        let time = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
        OrderContext::new(weight, 15.0, time).unwrap().with_region(region)
    }

    #[test]
    fn test_default_fee_north() {
        let fee = StandardShippingStrategy::default().calculate(&ctx(2.0, "North")).unwrap();
        assert_eq!(fee, Decimal::new(30000, 0));
    }

    #[test]
    fn test_region_factor_south() {
        let fee = StandardShippingStrategy::default().calculate(&ctx(2.0, "South")).unwrap();
        assert_eq!(fee, Decimal::new(45000, 0));
    }

    #[test]
    fn test_unknown_or_missing_region_is_neutral() {
        let strategy = StandardShippingStrategy::default();
        assert_eq!(strategy.calculate(&ctx(2.0, "Atlantis")).unwrap(), Decimal::new(30000, 0));
        assert_eq!(strategy.calculate(&ctx(2.0, "")).unwrap(), Decimal::new(30000, 0));
    }

    #[test]
    fn test_custom_params() {
        let strategy = StandardShippingStrategy::from_json(
            r#"{"BaseFee": 30000, "PerKgFee": 7000, "RegionFactors": {"North": 1.0, "South": 2.0}}"#,
        );
        assert_eq!(strategy.calculate(&ctx(3.0, "South")).unwrap(), Decimal::new(102000, 0));
        // Central is not in the custom map
        assert_eq!(strategy.calculate(&ctx(3.0, "Central")).unwrap(), Decimal::new(51000, 0));
    }

    #[test]
    fn test_partial_params_keep_other_defaults() {
        let params = StandardParams::from_json(r#"{"baseFee": 10000}"#);
        assert_eq!(params.base_fee, Decimal::new(10000, 0));
        assert_eq!(params.per_kg_fee, Decimal::new(5000, 0));
        assert_eq!(params.region_factors, StandardParams::default().region_factors);
    }

    #[test]
    fn test_empty_region_map_and_negative_fee_fall_back() {
        let params = StandardParams::from_json(r#"{"BaseFee": -5, "RegionFactors": {}}"#);
        assert_eq!(params, StandardParams::default());
    }

    #[test]
    fn test_explain_shows_configured_values_exactly() {
        let strategy = StandardShippingStrategy::from_json(
            r#"{"BaseFee": 20000.5, "PerKgFee": 5000, "RegionFactors": {"North": 1.125}}"#,
        );
        let c = ctx(1.0, "North");
        // (20000.5 + 5000) × 1.125 = 28125.5625
        assert_eq!(strategy.calculate(&c).unwrap(), Decimal::new(28126, 0));
        assert_eq!(
            strategy.explain(&c),
            "Standard Shipping: (Base(20,000.5) + PerKg(5,000) × Weight(1.00kg)) × RegionFactor[North](1.125) = 28,126"
        );
    }

    #[test]
    fn test_overflowing_fee_is_an_error() {
        let strategy = StandardShippingStrategy::new(StandardParams {
            per_kg_fee: Decimal::MAX,
            ..StandardParams::default()
        });
        let c = ctx(2.0, "North");
        assert_eq!(
            strategy.calculate(&c),
            Err(ShippingError::FeeOutOfRange("Standard Shipping".into()))
        );
        assert!(strategy.explain(&c).ends_with("= out of range"));
    }

    #[test]
    fn test_explain() {
        let details = StandardShippingStrategy::default().explain(&ctx(2.0, "Central"));
        assert_eq!(
            details,
            "Standard Shipping: (Base(20,000) + PerKg(5,000) × Weight(2.00kg)) × RegionFactor[Central](1.20) = 36,000"
        );
    }
}
