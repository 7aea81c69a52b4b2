//! Shipping quotes over a method catalog
//!
//! The three ways the rest of the shop asks for shipping fees: list every active
//! option, price one method for checkout, and price a method with add-ons.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::aggregates::ShippingMethod;
use crate::shipping::{apply_addons, AddOn, OrderContext, ShippingMethodCode, ShippingStrategy};
use crate::{Result, ShippingError};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShippingOption {
    pub method_code: String,
    pub name: String,
    pub estimated_fee: Decimal,
    pub calculation_details: String,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShippingQuote {
    pub method_code: String,
    pub method_name: String,
    pub fee: Decimal,
    pub calculation_details: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddOnQuote {
    pub method_code: String,
    pub method_name: String,
    pub base_fee: Decimal,
    pub total_fee: Decimal,
    pub addons_applied: Vec<String>,
    pub addons_count: usize,
    pub calculation_details: String,
}

impl AddOnQuote {
    pub fn addons_fee(&self) -> Decimal {
        self.total_fee - self.base_fee
    }
}

/// Prices every active method. A method that cannot be priced for `ctx` is still listed,
/// with a zero fee and `Not available: <reason>` as its details.
pub fn shipping_options(methods: &[ShippingMethod], ctx: &OrderContext) -> Vec<ShippingOption> {
    methods
        .iter()
        .filter(|m| m.is_active)
        .map(|method| {
            let priced = method
                .strategy()
                .and_then(|strategy| Ok((strategy.calculate(ctx)?, strategy.explain(ctx))));
            match priced {
                Ok((fee, details)) => ShippingOption {
                    method_code: method.code.clone(),
                    name: method.display_name.clone(),
                    estimated_fee: fee,
                    calculation_details: details,
                    available: true,
                },
                Err(err) => {
                    tracing::warn!(code = %method.code, error = %err, "shipping option unavailable");
                    ShippingOption {
                        method_code: method.code.clone(),
                        name: method.display_name.clone(),
                        estimated_fee: Decimal::ZERO,
                        calculation_details: format!("Not available: {err}"),
                        available: false,
                    }
                }
            }
        })
        .collect()
}

/// Prices the active method `code` for checkout. Unavailability is an error here.
pub fn checkout_quote(methods: &[ShippingMethod], code: &str, ctx: &OrderContext) -> Result<ShippingQuote> {
    let method = methods
        .iter()
        .find(|m| m.is_active && m.matches_code(code))
        .ok_or_else(|| ShippingError::MethodNotFound(code.to_string()))?;
    let strategy = method.strategy()?;
    let fee = strategy.calculate(ctx)?;
    tracing::debug!(code = %method.code, %fee, "checkout shipping quote");

    Ok(ShippingQuote {
        method_code: method.code.clone(),
        method_name: method.display_name.clone(),
        fee,
        calculation_details: strategy.explain(ctx),
    })
}

/// Prices `code` with `addons` applied in the given order. The base uses the catalog's
/// parameters for `code` when present, the built-in defaults otherwise.
pub fn addon_quote(
    methods: &[ShippingMethod],
    code: &str,
    addons: &[AddOn],
    ctx: &OrderContext,
) -> Result<AddOnQuote> {
    let code: ShippingMethodCode = code.parse()?;
    let params = methods
        .iter()
        .find(|m| m.matches_code(code.as_str()))
        .map(|m| m.params_json.as_str())
        .unwrap_or("");

    let base = code.strategy(params);
    let base_fee = base.calculate(ctx)?;
    let decorated = apply_addons(base, addons);
    let total_fee = decorated.calculate(ctx)?;
    let addons_applied: Vec<String> = addons.iter().map(AddOn::label).collect();
    tracing::debug!(%code, %base_fee, %total_fee, addons = addons_applied.len(), "add-on shipping quote");

    Ok(AddOnQuote {
        method_code: code.as_str().to_string(),
        method_name: decorated.name(),
        base_fee,
        total_fee,
        addons_count: addons_applied.len(),
        addons_applied,
        calculation_details: decorated.explain(ctx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipping::WeekendDay;
    use chrono::NaiveDate;

    fn ctx(hour: u32) -> OrderContext {
        let time = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(hour, 0, 0).unwrap();
        OrderContext::new(2.0, 10.0, time).unwrap().with_region("North")
    }

    #[test]
    fn test_options_before_cutoff() {
        let options = shipping_options(&ShippingMethod::seeded_catalog(), &ctx(10));
        let fees: Vec<Decimal> = options.iter().map(|o| o.estimated_fee).collect();
        assert_eq!(
            fees,
            [Decimal::new(30000, 0), Decimal::new(52000, 0), Decimal::new(80000, 0), Decimal::new(21000, 0)]
        );
        assert!(options.iter().all(|o| o.available));
    }

    #[test]
    fn test_options_substitute_unavailable_same_day() {
        let options = shipping_options(&ShippingMethod::seeded_catalog(), &ctx(16));
        let same_day = options.iter().find(|o| o.method_code == "SAME_DAY").unwrap();
        assert!(!same_day.available);
        assert_eq!(same_day.estimated_fee, Decimal::ZERO);
        assert_eq!(
            same_day.calculation_details,
            "Not available: Same-day delivery not available after 14:00. Please choose another shipping method."
        );
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn test_options_skip_inactive_and_survive_unknown_codes() {
        let mut catalog = ShippingMethod::seeded_catalog();
        catalog[1].is_active = false;
        catalog[0].code = "DRONE".to_string();
        let options = shipping_options(&catalog, &ctx(10));
        assert_eq!(options.len(), 3);
        assert!(options.iter().all(|o| o.method_code != "EXPRESS"));
        assert!(!options[0].available);
        assert_eq!(options[0].calculation_details, "Not available: Unknown shipping strategy: DRONE");
    }

    #[test]
    fn test_checkout_quote() {
        let quote = checkout_quote(&ShippingMethod::seeded_catalog(), "express", &ctx(8)).unwrap();
        assert_eq!(quote.method_code, "EXPRESS");
        assert_eq!(quote.fee, Decimal::new(67000, 0));
        assert!(quote.calculation_details.ends_with("= 67,000"));
    }

    #[test]
    fn test_checkout_quote_propagates_cutoff() {
        let err = checkout_quote(&ShippingMethod::seeded_catalog(), "SAME_DAY", &ctx(14)).unwrap_err();
        assert_eq!(err, ShippingError::CutoffExceeded { cutoff_hour: 14 });
    }

    #[test]
    fn test_checkout_quote_rejects_inactive_method() {
        let mut catalog = ShippingMethod::seeded_catalog();
        catalog[3].is_active = false;
        let err = checkout_quote(&catalog, "ECO", &ctx(10)).unwrap_err();
        assert_eq!(err, ShippingError::MethodNotFound("ECO".to_string()));
    }

    #[test]
    fn test_addon_quote() {
        let quote = addon_quote(
            &ShippingMethod::seeded_catalog(),
            "standard",
            &[AddOn::Insurance, AddOn::WeekendDelivery { day: WeekendDay::Saturday }],
            &ctx(10),
        )
        .unwrap();
        assert_eq!(quote.method_code, "STANDARD");
        assert_eq!(quote.base_fee, Decimal::new(30000, 0));
        assert_eq!(quote.total_fee, Decimal::new(3001000, 2));
        assert_eq!(quote.addons_fee(), Decimal::new(1000, 2));
        assert_eq!(quote.addons_applied, ["Insurance", "Weekend Delivery (Saturday)"]);
        assert_eq!(quote.addons_count, 2);
        assert_eq!(quote.method_name, "Standard Shipping + Insurance + Weekend Delivery (Saturday)");
        assert_eq!(quote.calculation_details.lines().count(), 3);
    }

    #[test]
    fn test_addon_quote_uses_catalog_params_and_falls_back_to_defaults() {
        let mut catalog = ShippingMethod::seeded_catalog();
        catalog[3].params_json = r#"{"BaseFee": 1000}"#.to_string();
        let eco = addon_quote(&catalog, "ECO", &[], &ctx(10)).unwrap();
        assert_eq!(eco.base_fee, Decimal::new(7000, 0));

        let standard = addon_quote(&[], "STANDARD", &[], &ctx(10)).unwrap();
        assert_eq!(standard.base_fee, Decimal::new(30000, 0));
    }

    #[test]
    fn test_addon_quote_unknown_code() {
        let err = addon_quote(&[], "TELEPORT", &[AddOn::Insurance], &ctx(10)).unwrap_err();
        assert_eq!(err, ShippingError::UnknownStrategyCode("TELEPORT".to_string()));
    }
}
