//! Weekend delivery

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Surcharge;
use super::shown_increment;
use crate::domain::value_objects::round_cents;
use crate::shipping::OrderContext;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekendDay {
    #[serde(alias = "saturday", alias = "SATURDAY")]
    Saturday,
    #[serde(alias = "sunday", alias = "SUNDAY")]
    Sunday,
}

impl fmt::Display for WeekendDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saturday => write!(f, "Saturday"),
            Self::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Flat fee chosen by the preferred day; independent of the order itself.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekendDelivery {
    pub day: WeekendDay,
    pub saturday_fee: Decimal,
    pub sunday_fee: Decimal,
}

impl WeekendDelivery {
    pub fn new(day: WeekendDay) -> Self {
        Self { day, saturday_fee: Decimal::new(600, 2), sunday_fee: Decimal::new(1000, 2) }
    }

    fn fee(&self) -> Decimal {
        match self.day {
            WeekendDay::Saturday => self.saturday_fee,
            WeekendDay::Sunday => self.sunday_fee,
        }
    }
}

impl Default for WeekendDelivery {
    fn default() -> Self {
        Self::new(WeekendDay::Saturday)
    }
}

impl Surcharge for WeekendDelivery {
    fn label(&self) -> String {
        format!("Weekend Delivery ({})", self.day)
    }

    fn increment(&self, _ctx: &OrderContext) -> Result<Decimal> {
        Ok(round_cents(self.fee()))
    }

    fn describe(&self, ctx: &OrderContext) -> String {
        format!("{} = {}", self.label(), shown_increment(self.increment(ctx)))
    }
}
