//! Shipping fee engine
//!
//! A [`ShippingStrategy`] turns an [`OrderContext`] into a fee and a human-readable
//! breakdown. Four formulas are provided (see [`strategies`]); any strategy can be
//! wrapped in one or more [`ShippingDecorator`]s that add a surcharge on top.
//!
//! ```ignore
//! let base = create_strategy("STANDARD", "{}")?;
//! let quoted = InsuranceDecorator::new(base, Insurance::default());
//! let fee = quoted.calculate(&ctx)?;
//! println!("{}", quoted.explain(&ctx));
//! ```

use rust_decimal::Decimal;
use std::fmt;

use crate::Result;

pub mod addons;
pub mod context;
pub mod decorators;
pub mod factory;
pub(crate) mod params;
pub mod strategies;

pub use addons::{apply_addons, AddOn};
pub use context::{OrderContext, MAX_MEASURE};
pub use decorators::{
    GiftWrapping, GiftWrappingDecorator, Insurance, InsuranceDecorator, PriorityHandling,
    PriorityHandlingDecorator, ShippingDecorator, SignatureRequired, SignatureRequiredDecorator,
    Surcharge, WeekendDay, WeekendDelivery, WeekendDeliveryDecorator,
};
pub use factory::{create_strategy, ShippingMethodCode};
pub use strategies::{
    EcoShippingStrategy, ExpressShippingStrategy, SameDayShippingStrategy,
    StandardShippingStrategy,
};

/// Fee calculation contract shared by base formulas and decorators.
pub trait ShippingStrategy: fmt::Debug + Send + Sync {
    /// Short display label.
    fn name(&self) -> String;

    /// Fee for `ctx`, already rounded. Fails only when the method is unavailable for `ctx`.
    fn calculate(&self, ctx: &OrderContext) -> Result<Decimal>;

    /// Breakdown of [`calculate`](Self::calculate), one line per component, each ending in
    /// `= <amount>`. Never fails; an unavailable method explains why instead.
    fn explain(&self, ctx: &OrderContext) -> String;
}
