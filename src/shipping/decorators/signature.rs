//! Signature on delivery

use rust_decimal::Decimal;

use super::Surcharge;
use super::shown_increment;
use crate::domain::value_objects::round_cents;
use crate::shipping::OrderContext;
use crate::Result;

/// Flat fee; adult signature costs more than a plain one.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureRequired {
    pub adult: bool,
    pub signature_fee: Decimal,
    pub adult_signature_fee: Decimal,
}

impl Default for SignatureRequired {
    fn default() -> Self {
        Self {
            adult: false,
            signature_fee: Decimal::new(250, 2),
            adult_signature_fee: Decimal::new(400, 2),
        }
    }
}

impl SignatureRequired {
    pub fn adult() -> Self {
        Self { adult: true, ..Self::default() }
    }

    fn fee(&self) -> Decimal {
        if self.adult { self.adult_signature_fee } else { self.signature_fee }
    }
}

impl Surcharge for SignatureRequired {
    fn label(&self) -> String {
        let label = if self.adult { "Adult Signature Required" } else { "Signature Required" };
        label.to_string()
    }

    fn increment(&self, _ctx: &OrderContext) -> Result<Decimal> {
        Ok(round_cents(self.fee()))
    }

    fn describe(&self, ctx: &OrderContext) -> String {
        format!("{} = {}", self.label(), shown_increment(self.increment(ctx)))
    }
}
