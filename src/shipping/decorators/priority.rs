//! Priority handling for fragile or high-value parcels

use rust_decimal::Decimal;

use super::Surcharge;
use super::shown_increment;
use crate::domain::value_objects::{format_exact, format_measure, round_cents, within_range};
use crate::shipping::OrderContext;
use crate::Result;

/// `priorityFee + weight * weightMultiplier`.
#[derive(Clone, Debug, PartialEq)]
pub struct PriorityHandling {
    pub priority_fee: Decimal,
    pub weight_multiplier: Decimal,
}

impl Default for PriorityHandling {
    fn default() -> Self {
        Self { priority_fee: Decimal::new(500, 2), weight_multiplier: Decimal::new(50, 2) }
    }
}

impl PriorityHandling {
    pub fn new(priority_fee: Decimal, weight_multiplier: Decimal) -> Self {
        Self { priority_fee, weight_multiplier }
    }
}

impl Surcharge for PriorityHandling {
    fn label(&self) -> String {
        "Priority Handling".to_string()
    }

    fn increment(&self, ctx: &OrderContext) -> Result<Decimal> {
        let raw = ctx
            .weight_kg()
            .checked_mul(self.weight_multiplier)
            .and_then(|v| v.checked_add(self.priority_fee));
        within_range(&self.label(), raw).map(round_cents)
    }

    fn describe(&self, ctx: &OrderContext) -> String {
        format!(
            "Priority Handling: Base {} + Weight {}kg × {} = {}",
            format_exact(self.priority_fee, 2),
            format_measure(ctx.weight_kg()),
            format_exact(self.weight_multiplier, 2),
            shown_increment(self.increment(ctx)),
        )
    }
}
