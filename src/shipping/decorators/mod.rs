//! Surcharge decorators
//!
//! A [`ShippingDecorator`] wraps exactly one strategy (which may itself be decorated)
//! and adds the increment of its [`Surcharge`] on top of the wrapped fee. The wrapped
//! strategy is owned, never mutated, and its explanation is kept verbatim above the
//! decorator's own line, so a stack of any depth still shows every component.

use rust_decimal::Decimal;
use std::fmt;

use crate::domain::value_objects::{format_amount, within_range};
use crate::shipping::{OrderContext, ShippingStrategy};
use crate::Result;

pub mod gift_wrapping;
pub mod insurance;
pub mod priority;
pub mod signature;
pub mod weekend;

pub use gift_wrapping::GiftWrapping;
pub use insurance::Insurance;
pub use priority::PriorityHandling;
pub use signature::SignatureRequired;
pub use weekend::{WeekendDay, WeekendDelivery};

pub type InsuranceDecorator = ShippingDecorator<Insurance>;
pub type GiftWrappingDecorator = ShippingDecorator<GiftWrapping>;
pub type SignatureRequiredDecorator = ShippingDecorator<SignatureRequired>;
pub type PriorityHandlingDecorator = ShippingDecorator<PriorityHandling>;
pub type WeekendDeliveryDecorator = ShippingDecorator<WeekendDelivery>;

/// The add-on part of a decorator.
pub trait Surcharge: fmt::Debug + Send + Sync {
    /// Appended to the wrapped strategy's name as `" + <label>"`.
    fn label(&self) -> String;

    /// Amount added on top of the wrapped fee, rounded to cents. Never negative.
    fn increment(&self, ctx: &OrderContext) -> Result<Decimal>;

    /// Single explanation line ending in `= <increment>`.
    fn describe(&self, ctx: &OrderContext) -> String;
}

/// Right-hand side of a surcharge's breakdown line.
fn shown_increment(increment: Result<Decimal>) -> String {
    match increment {
        Ok(amount) => format_amount(amount, 2),
        Err(_) => "out of range".to_string(),
    }
}

#[derive(Debug)]
pub struct ShippingDecorator<S> {
    inner: Box<dyn ShippingStrategy>,
    surcharge: S,
}

impl<S: Surcharge> ShippingDecorator<S> {
    pub fn new(inner: Box<dyn ShippingStrategy>, surcharge: S) -> Self {
        Self { inner, surcharge }
    }

    pub fn inner(&self) -> &dyn ShippingStrategy { self.inner.as_ref() }
    pub fn surcharge(&self) -> &S { &self.surcharge }

    /// This decorator's contribution alone, independent of what it wraps.
    pub fn own_increment(&self, ctx: &OrderContext) -> Result<Decimal> {
        self.surcharge.increment(ctx)
    }
}

impl<S: Surcharge> ShippingStrategy for ShippingDecorator<S> {
    fn name(&self) -> String {
        format!("{} + {}", self.inner.name(), self.surcharge.label())
    }

    fn calculate(&self, ctx: &OrderContext) -> Result<Decimal> {
        let wrapped = self.inner.calculate(ctx)?;
        let increment = self.surcharge.increment(ctx)?;
        within_range(&self.name(), wrapped.checked_add(increment))
    }

    fn explain(&self, ctx: &OrderContext) -> String {
        format!("{}\n{}", self.inner.explain(ctx), self.surcharge.describe(ctx))
    }
}
