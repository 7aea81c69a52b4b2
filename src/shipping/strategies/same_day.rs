//! Same-day shipping: `base + perKm * distance`, only before the daily cutoff

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::value_objects::{format_exact, format_measure, round_whole, within_range};
use crate::shipping::params::{accept, amount_or, parse_overrides};
use crate::shipping::strategies::shown_fee;
use crate::shipping::{OrderContext, ShippingStrategy};
use crate::{Result, ShippingError};

const STRATEGY: &str = "SAME_DAY";
const NAME: &str = "Same-Day Shipping";

#[derive(Clone, Debug, PartialEq)]
pub struct SameDayParams {
    pub base_fee: Decimal,
    pub per_km_fee: Decimal,
    /// Orders placed at or after this local hour cannot ship same day.
    pub cutoff_hour: u32,
}

impl Default for SameDayParams {
    fn default() -> Self {
        Self {
            base_fee: Decimal::new(50000, 0),
            per_km_fee: Decimal::new(3000, 0),
            cutoff_hour: 14,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Overrides {
    #[serde(alias = "baseFee")]
    base_fee: Option<Decimal>,
    #[serde(alias = "perKmFee")]
    per_km_fee: Option<Decimal>,
    #[serde(alias = "cutoffHour")]
    cutoff_hour: Option<u32>,
}

impl SameDayParams {
    pub fn from_json(blob: &str) -> Self {
        let o: Overrides = parse_overrides(STRATEGY, blob);
        let d = Self::default();
        Self {
            base_fee: amount_or(STRATEGY, "BaseFee", o.base_fee, d.base_fee),
            per_km_fee: amount_or(STRATEGY, "PerKmFee", o.per_km_fee, d.per_km_fee),
            cutoff_hour: accept(STRATEGY, "CutoffHour", o.cutoff_hour, d.cutoff_hour, |h| *h <= 24),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SameDayShippingStrategy {
    params: SameDayParams,
}

impl SameDayShippingStrategy {
    pub fn new(params: SameDayParams) -> Self { Self { params } }
    pub fn from_json(blob: &str) -> Self { Self::new(SameDayParams::from_json(blob)) }
    pub fn params(&self) -> &SameDayParams { &self.params }

    pub fn is_available(&self, ctx: &OrderContext) -> bool {
        ctx.hour() < self.params.cutoff_hour
    }

    fn fee(&self, ctx: &OrderContext) -> Result<Decimal> {
        let raw = self
            .params
            .per_km_fee
            .checked_mul(ctx.distance_km())
            .and_then(|v| v.checked_add(self.params.base_fee));
        within_range(NAME, raw).map(round_whole)
    }
}

impl ShippingStrategy for SameDayShippingStrategy {
    fn name(&self) -> String {
        NAME.to_string()
    }

    fn calculate(&self, ctx: &OrderContext) -> Result<Decimal> {
        if !self.is_available(ctx) {
            return Err(ShippingError::CutoffExceeded { cutoff_hour: self.params.cutoff_hour });
        }
        self.fee(ctx)
    }

    fn explain(&self, ctx: &OrderContext) -> String {
        if !self.is_available(ctx) {
            return format!(
                "Same-Day Shipping: Not available (cutoff time: {:02}:00)",
                self.params.cutoff_hour
            );
        }
        format!(
            "Same-Day Shipping: Base({}) + PerKm({}) × Distance({}km) = {}",
            format_exact(self.params.base_fee, 0),
            format_exact(self.params.per_km_fee, 0),
            format_measure(ctx.distance_km()),
            shown_fee(self.fee(ctx)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx(distance: f64, hour: u32, minute: u32) -> OrderContext {
        let time = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(hour, minute, 0).unwrap();
        OrderContext::new(2.0, distance, time).unwrap()
    }

    #[test]
    fn test_fee_before_cutoff() {
        let fee = SameDayShippingStrategy::default().calculate(&ctx(10.0, 13, 59)).unwrap();
        assert_eq!(fee, Decimal::new(80000, 0));
    }

    #[test]
    fn test_cutoff_hour_itself_is_too_late() {
        let strategy = SameDayShippingStrategy::default();
        assert_eq!(
            strategy.calculate(&ctx(10.0, 14, 0)),
            Err(ShippingError::CutoffExceeded { cutoff_hour: 14 })
        );
        assert!(strategy.calculate(&ctx(10.0, 14, 30)).is_err());
        assert!(strategy.calculate(&ctx(10.0, 23, 0)).is_err());
    }

    #[test]
    fn test_explain_after_cutoff_does_not_fail() {
        let details = SameDayShippingStrategy::default().explain(&ctx(10.0, 15, 0));
        assert_eq!(details, "Same-Day Shipping: Not available (cutoff time: 14:00)");
    }

    #[test]
    fn test_explain_before_cutoff() {
        let details = SameDayShippingStrategy::default().explain(&ctx(5.0, 9, 0));
        assert_eq!(details, "Same-Day Shipping: Base(50,000) + PerKm(3,000) × Distance(5.00km) = 65,000");
    }

    #[test]
    fn test_custom_cutoff() {
        let strategy = SameDayShippingStrategy::from_json(r#"{"CutoffHour": 9}"#);
        assert!(strategy.calculate(&ctx(0.0, 8, 59)).is_ok());
        assert!(strategy.calculate(&ctx(0.0, 9, 0)).is_err());
        assert_eq!(strategy.explain(&ctx(0.0, 9, 0)), "Same-Day Shipping: Not available (cutoff time: 09:00)");
    }

    #[test]
    fn test_out_of_range_cutoff_falls_back() {
        assert_eq!(SameDayParams::from_json(r#"{"CutoffHour": 30}"#).cutoff_hour, 14);
        assert_eq!(SameDayParams::from_json(r#"{"CutoffHour": -1}"#).cutoff_hour, 14);
    }
}
