//! Shipping insurance

use rust_decimal::Decimal;

use super::Surcharge;
use super::shown_increment;
use crate::domain::value_objects::{format_exact, format_rate, round_cents, within_range};
use crate::shipping::OrderContext;
use crate::Result;

/// `max(weight * 100 * rate, minimum)`.
///
/// The insured value is estimated from weight, not from the order subtotal.
#[derive(Clone, Debug, PartialEq)]
pub struct Insurance {
    pub rate: Decimal,
    pub minimum: Decimal,
}

impl Default for Insurance {
    fn default() -> Self {
        Self { rate: Decimal::new(2, 2), minimum: Decimal::new(200, 2) }
    }
}

impl Insurance {
    pub fn new(rate: Decimal, minimum: Decimal) -> Self {
        Self { rate, minimum }
    }

    pub fn estimated_value(&self, ctx: &OrderContext) -> Decimal {
        // assumes 100 per kg of goods; weight is bounded so this cannot overflow
        ctx.weight_kg() * Decimal::ONE_HUNDRED
    }
}

impl Surcharge for Insurance {
    fn label(&self) -> String {
        "Insurance".to_string()
    }

    fn increment(&self, ctx: &OrderContext) -> Result<Decimal> {
        let premium = within_range(&self.label(), self.estimated_value(ctx).checked_mul(self.rate))?;
        Ok(round_cents(premium.max(self.minimum)))
    }

    fn describe(&self, ctx: &OrderContext) -> String {
        format!(
            "Insurance: max(Value ~{} × {}%, Min {}) = {}",
            format_exact(self.estimated_value(ctx), 2),
            format_rate(self.rate * Decimal::ONE_HUNDRED),
            format_exact(self.minimum, 2),
            shown_increment(self.increment(ctx)),
        )
    }
}
