//! Shipping Method Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shipping::{ShippingMethodCode, ShippingStrategy};
use crate::Result;

/// A configured, selectable shipping method. `params_json` is the strategy's parameter blob.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShippingMethod {
    pub id: Uuid,
    pub code: String,
    pub display_name: String,
    pub params_json: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShippingMethod {
    pub fn create(code: ShippingMethodCode, display_name: impl Into<String>, params_json: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            code: code.as_str().to_string(),
            display_name: display_name.into(),
            params_json: params_json.into(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// The four default methods with their default parameter blobs.
    pub fn seeded_catalog() -> Vec<Self> {
        vec![
            Self::create(
                ShippingMethodCode::Standard,
                "Standard Shipping (3-5 days)",
                serde_json::json!({
                    "BaseFee": 20000,
                    "PerKgFee": 5000,
                    "RegionFactors": { "North": 1.0, "Central": 1.2, "South": 1.5 }
                })
                .to_string(),
            ),
            Self::create(
                ShippingMethodCode::Express,
                "Express Shipping (1-2 days)",
                serde_json::json!({
                    "BaseFee": 30000,
                    "BaseMultiplier": 1.2,
                    "PerKgFee": 8000,
                    "PeakHourSurge": 15000
                })
                .to_string(),
            ),
            Self::create(
                ShippingMethodCode::SameDay,
                "Same-Day Shipping",
                serde_json::json!({ "BaseFee": 50000, "PerKmFee": 3000, "CutoffHour": 14 }).to_string(),
            ),
            Self::create(
                ShippingMethodCode::Eco,
                "Eco Shipping (5-7 days)",
                serde_json::json!({
                    "BaseFee": 15000,
                    "PerKgFee": 3000,
                    "BulkWeightThreshold": 10.0,
                    "BulkDiscount": 0.15
                })
                .to_string(),
            ),
        ]
    }

    pub fn matches_code(&self, code: &str) -> bool {
        self.code.trim().eq_ignore_ascii_case(code.trim())
    }

    /// Strategy configured from this record; fails only for a code the engine does not know.
    pub fn strategy(&self) -> Result<Box<dyn ShippingStrategy>> {
        let code: ShippingMethodCode = self.code.parse()?;
        Ok(code.strategy(&self.params_json))
    }

    pub fn reconfigure(&mut self, display_name: impl Into<String>, params_json: impl Into<String>, is_active: bool) {
        self.display_name = display_name.into();
        self.params_json = params_json.into();
        self.is_active = is_active;
        self.touch();
    }

    fn touch(&mut self) { self.updated_at = Utc::now(); }
}
