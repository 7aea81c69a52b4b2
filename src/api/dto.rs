use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::ApiError;
use crate::config::AppConfig;
use crate::domain::aggregates::ShippingMethod;
use crate::shipping::{AddOn, OrderContext};

/// Order facts shared by every quote request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuoteContext {
    #[validate(range(min = 0.0, max = 1000000.0))]
    pub weight: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000000.0))]
    pub distance: f64,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    /// Local wall-clock time of the order; the server's local time when absent.
    #[serde(default)]
    pub order_time: Option<NaiveDateTime>,
}

impl QuoteContext {
    pub fn to_order_context(&self, config: &AppConfig) -> Result<OrderContext, ApiError> {
        let order_time = self.order_time.unwrap_or_else(|| config.local_now());
        let mut ctx = OrderContext::new(self.weight, self.distance, order_time)?;
        if let Some(region) = &self.region {
            ctx = ctx.with_region(region.as_str());
        }
        if let Some(subtotal) = self.subtotal {
            ctx = ctx.with_subtotal(subtotal)?;
        }
        Ok(ctx)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1))]
    pub method_code: String,
    #[serde(flatten)]
    #[validate]
    pub context: QuoteContext,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddOnQuoteRequest {
    #[validate(length(min = 1))]
    pub method_code: String,
    #[serde(default)]
    pub addons: Vec<AddOn>,
    #[serde(flatten)]
    #[validate]
    pub context: QuoteContext,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateShippingMethodRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    #[serde(default)]
    pub params_json: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct ShippingMethodResponse {
    pub id: uuid::Uuid,
    pub code: String,
    pub display_name: String,
    pub params_json: String,
    pub is_active: bool,
}

impl From<ShippingMethod> for ShippingMethodResponse {
    fn from(m: ShippingMethod) -> Self {
        Self { id: m.id, code: m.code, display_name: m.display_name, params_json: m.params_json, is_active: m.is_active }
    }
}
