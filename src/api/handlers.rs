use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{
    AddOnQuoteRequest, QuoteContext, QuoteRequest, ShippingMethodResponse, UpdateShippingMethodRequest,
};
use crate::api::{ApiError, AppState};
use crate::db;
use crate::service::{self, AddOnQuote, ShippingOption, ShippingQuote};

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy", "service": "mini-ecommerce-shipping"}))
}

pub async fn shipping_options(State(s): State<AppState>, Json(r): Json<QuoteContext>) -> Result<Json<Vec<ShippingOption>>, ApiError> {
    r.validate()?;
    let ctx = r.to_order_context(&s.config)?;
    let methods = s.methods().await?;
    Ok(Json(service::shipping_options(&methods, &ctx)))
}

pub async fn checkout_quote(State(s): State<AppState>, Json(r): Json<QuoteRequest>) -> Result<Json<ShippingQuote>, ApiError> {
    r.validate()?;
    let ctx = r.context.to_order_context(&s.config)?;
    let methods = s.methods().await?;
    Ok(Json(service::checkout_quote(&methods, &r.method_code, &ctx)?))
}

pub async fn addon_quote(State(s): State<AppState>, Json(r): Json<AddOnQuoteRequest>) -> Result<Json<AddOnQuote>, ApiError> {
    r.validate()?;
    let ctx = r.context.to_order_context(&s.config)?;
    let methods = s.methods().await?;
    Ok(Json(service::addon_quote(&methods, &r.method_code, &r.addons, &ctx)?))
}

pub async fn list_methods(State(s): State<AppState>) -> Result<Json<Vec<ShippingMethodResponse>>, ApiError> {
    let methods = s.methods().await?;
    Ok(Json(methods.into_iter().map(Into::into).collect()))
}

pub async fn update_method(State(s): State<AppState>, Path(id): Path<Uuid>, Json(r): Json<UpdateShippingMethodRequest>) -> Result<Json<ShippingMethodResponse>, ApiError> {
    r.validate()?;
    let pool = s.db.as_ref().ok_or(ApiError::ReadOnlyCatalog)?;
    let mut method = db::find_method(pool, id).await?.ok_or_else(|| ApiError::RecordNotFound(id.to_string()))?;
    method.reconfigure(r.display_name, r.params_json, r.is_active);
    let saved = db::save_method(pool, &method).await?;
    tracing::info!(code = %saved.code, active = saved.is_active, "shipping method reconfigured");
    Ok(Json(saved.into()))
}
