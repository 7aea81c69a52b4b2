//! Caller-ordered add-on descriptors

use serde::{Deserialize, Serialize};

use crate::shipping::decorators::{
    GiftWrapping, Insurance, PriorityHandling, ShippingDecorator, SignatureRequired, WeekendDay,
    WeekendDelivery,
};
use crate::shipping::ShippingStrategy;

/// One optional service requested at checkout. Uses the default fee schedule of the
/// matching decorator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddOn {
    Insurance,
    GiftWrapping,
    Signature {
        #[serde(default)]
        adult: bool,
    },
    PriorityHandling,
    WeekendDelivery { day: WeekendDay },
}

impl AddOn {
    pub fn label(&self) -> String {
        match self {
            Self::Insurance => "Insurance".to_string(),
            Self::GiftWrapping => "Gift Wrapping".to_string(),
            Self::Signature { adult: true } => "Adult Signature".to_string(),
            Self::Signature { adult: false } => "Signature".to_string(),
            Self::PriorityHandling => "Priority Handling".to_string(),
            Self::WeekendDelivery { day } => format!("Weekend Delivery ({day})"),
        }
    }

    /// Wraps `inner` in the decorator for this add-on.
    pub fn wrap(&self, inner: Box<dyn ShippingStrategy>) -> Box<dyn ShippingStrategy> {
        match *self {
            Self::Insurance => Box::new(ShippingDecorator::new(inner, Insurance::default())),
            Self::GiftWrapping => Box::new(ShippingDecorator::new(inner, GiftWrapping::default())),
            Self::Signature { adult } => Box::new(ShippingDecorator::new(
                inner,
                SignatureRequired { adult, ..SignatureRequired::default() },
            )),
            Self::PriorityHandling => {
                Box::new(ShippingDecorator::new(inner, PriorityHandling::default()))
            }
            Self::WeekendDelivery { day } => {
                Box::new(ShippingDecorator::new(inner, WeekendDelivery::new(day)))
            }
        }
    }
}

/// Applies `addons` in order: the first entry wraps `base` directly, the last is outermost.
pub fn apply_addons(base: Box<dyn ShippingStrategy>, addons: &[AddOn]) -> Box<dyn ShippingStrategy> {
    addons.iter().fold(base, |inner, addon| addon.wrap(inner))
}
