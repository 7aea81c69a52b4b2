//! Order context passed to every fee calculation

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::domain::value_objects::decimal_from_f64;
use crate::{Result, ShippingError};

/// Largest accepted weight (kg) or distance (km).
pub const MAX_MEASURE: f64 = 1_000_000.0;

/// Inputs for a single quote. Built fresh per request and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderContext {
    weight: f64,
    distance: f64,
    weight_kg: Decimal,
    distance_km: Decimal,
    region: Option<String>,
    subtotal: Decimal,
    order_time: NaiveDateTime,
}

impl OrderContext {
    /// `weight` in kg, `distance` in km, `order_time` as local wall-clock time.
    /// Each measure must lie in `0..=MAX_MEASURE`.
    pub fn new(weight: f64, distance: f64, order_time: NaiveDateTime) -> Result<Self> {
        let (weight, weight_kg) = measure("weight", weight)?;
        let (distance, distance_km) = measure("distance", distance)?;
        Ok(Self {
            weight,
            distance,
            weight_kg,
            distance_km,
            region: None,
            subtotal: Decimal::ZERO,
            order_time,
        })
    }

    /// A blank region is treated as absent.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        let region = region.into();
        let trimmed = region.trim();
        self.region = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_subtotal(mut self, subtotal: Decimal) -> Result<Self> {
        if subtotal < Decimal::ZERO {
            return Err(ShippingError::InvalidContext { field: "subtotal" });
        }
        self.subtotal = subtotal;
        Ok(self)
    }

    pub fn weight(&self) -> f64 { self.weight }
    pub fn distance(&self) -> f64 { self.distance }
    /// Weight as the exact decimal the fee formulas use.
    pub fn weight_kg(&self) -> Decimal { self.weight_kg }
    pub fn distance_km(&self) -> Decimal { self.distance_km }
    pub fn region(&self) -> Option<&str> { self.region.as_deref() }
    pub fn subtotal(&self) -> Decimal { self.subtotal }
    pub fn order_time(&self) -> NaiveDateTime { self.order_time }

    /// Local hour of day of the order, `0..=23`.
    pub fn hour(&self) -> u32 { self.order_time.hour() }
}

fn measure(field: &'static str, value: f64) -> Result<(f64, Decimal)> {
    if !(0.0..=MAX_MEASURE).contains(&value) {
        return Err(ShippingError::InvalidContext { field });
    }
    // normalises -0.0
    let value = value.max(0.0);
    let exact = decimal_from_f64(value).ok_or(ShippingError::InvalidContext { field })?;
    Ok((value, exact))
}
