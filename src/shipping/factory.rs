//! Strategy selection by method code

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shipping::{
    EcoShippingStrategy, ExpressShippingStrategy, SameDayShippingStrategy, ShippingStrategy,
    StandardShippingStrategy,
};
use crate::{Result, ShippingError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingMethodCode {
    Standard,
    Express,
    SameDay,
    Eco,
}

impl ShippingMethodCode {
    pub const ALL: [ShippingMethodCode; 4] = [Self::Standard, Self::Express, Self::SameDay, Self::Eco];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Express => "EXPRESS",
            Self::SameDay => "SAME_DAY",
            Self::Eco => "ECO",
        }
    }

    /// Builds this method's strategy from a parameter blob (empty or malformed = defaults).
    pub fn strategy(&self, params_json: &str) -> Box<dyn ShippingStrategy> {
        match self {
            Self::Standard => Box::new(StandardShippingStrategy::from_json(params_json)),
            Self::Express => Box::new(ExpressShippingStrategy::from_json(params_json)),
            Self::SameDay => Box::new(SameDayShippingStrategy::from_json(params_json)),
            Self::Eco => Box::new(EcoShippingStrategy::from_json(params_json)),
        }
    }
}

impl fmt::Display for ShippingMethodCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingMethodCode {
    type Err = ShippingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "STANDARD" => Ok(Self::Standard),
            "EXPRESS" => Ok(Self::Express),
            "SAME_DAY" => Ok(Self::SameDay),
            "ECO" => Ok(Self::Eco),
            _ => Err(ShippingError::UnknownStrategyCode(s.to_string())),
        }
    }
}

/// Selects a strategy by code (case-insensitive) and configures it from `params_json`.
pub fn create_strategy(code: &str, params_json: &str) -> Result<Box<dyn ShippingStrategy>> {
    let code: ShippingMethodCode = code.parse()?;
    Ok(code.strategy(params_json))
}
