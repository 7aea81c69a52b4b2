//! Gift wrapping

use rust_decimal::Decimal;

use super::Surcharge;
use super::shown_increment;
use crate::domain::value_objects::{format_exact, round_cents, within_range};
use crate::shipping::OrderContext;
use crate::Result;

/// Weight assumed per wrapped item, in kg.
const KG_PER_ITEM: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// `items * perItemFee + cardFee`, where `items = max(1, ceil(weight / 0.5))`.
///
/// The item count is a weight heuristic, not the number of cart lines.
#[derive(Clone, Debug, PartialEq)]
pub struct GiftWrapping {
    pub per_item_fee: Decimal,
    pub card_fee: Decimal,
}

impl Default for GiftWrapping {
    fn default() -> Self {
        Self { per_item_fee: Decimal::new(350, 2), card_fee: Decimal::new(150, 2) }
    }
}

impl GiftWrapping {
    pub fn new(per_item_fee: Decimal, card_fee: Decimal) -> Self {
        Self { per_item_fee, card_fee }
    }

    pub fn item_count(&self, ctx: &OrderContext) -> Decimal {
        (ctx.weight_kg() / KG_PER_ITEM).ceil().max(Decimal::ONE)
    }
}

impl Surcharge for GiftWrapping {
    fn label(&self) -> String {
        "Gift Wrapping".to_string()
    }

    fn increment(&self, ctx: &OrderContext) -> Result<Decimal> {
        let raw = self
            .item_count(ctx)
            .checked_mul(self.per_item_fee)
            .and_then(|v| v.checked_add(self.card_fee));
        within_range(&self.label(), raw).map(round_cents)
    }

    fn describe(&self, ctx: &OrderContext) -> String {
        format!(
            "Gift Wrapping: {} items × {} + Gift card {} = {}",
            self.item_count(ctx),
            format_exact(self.per_item_fee, 2),
            format_exact(self.card_fee, 2),
            shown_increment(self.increment(ctx)),
        )
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
    fn test_item_count_heuristic() {
        let wrap = GiftWrapping::default();
        assert_eq!(wrap.item_count(&ctx(0.0)), Decimal::ONE);
        assert_eq!(wrap.item_count(&ctx(0.5)), Decimal::ONE);
        assert_eq!(wrap.item_count(&ctx(0.51)), Decimal::TWO);
        assert_eq!(wrap.item_count(&ctx(2.0)), Decimal::new(4, 0));
        // heaviest accepted parcel: 1,000,000 kg / 0.5
        assert_eq!(wrap.item_count(&ctx(1_000_000.0)), Decimal::new(2_000_000, 0));
    }

    #[test]
    fn test_increment_and_describe() {
        let wrap = GiftWrapping::default();
        assert_eq!(wrap.increment(&ctx(2.0)), Ok(Decimal::new(1550, 2)));
        assert_eq!(wrap.describe(&ctx(2.0)), "Gift Wrapping: 4 items × 3.50 + Gift card 1.50 = 15.50");
    }
}
