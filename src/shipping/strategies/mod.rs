//! Concrete fee formulas
pub mod eco;
pub mod express;
pub mod same_day;
pub mod standard;

pub use eco::{EcoParams, EcoShippingStrategy};
pub use express::{ExpressParams, ExpressShippingStrategy};
pub use same_day::{SameDayParams, SameDayShippingStrategy};
pub use standard::{StandardParams, StandardShippingStrategy};

use rust_decimal::Decimal;

use crate::domain::value_objects::format_amount;
use crate::Result;

/// Right-hand side of a strategy's breakdown line.
fn shown_fee(fee: Result<Decimal>) -> String {
    match fee {
        Ok(fee) => format_amount(fee, 0),
        Err(_) => "out of range".to_string(),
    }
}
