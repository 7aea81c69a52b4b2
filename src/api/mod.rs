//! HTTP surface over the shipping engine

use axum::routing::{get, post, put};
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::db;
use crate::domain::aggregates::ShippingMethod;

pub mod dto;
pub mod error;
pub mod handlers;

pub use error::ApiError;

/// Without a database the service quotes from the built-in catalog and cannot be reconfigured.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<PgPool>,
    pub config: Arc<AppConfig>,
    catalog: Arc<Vec<ShippingMethod>>,
}

impl AppState {
    pub fn new(db: Option<PgPool>, config: AppConfig) -> Self {
        Self { db, config: Arc::new(config), catalog: Arc::new(ShippingMethod::seeded_catalog()) }
    }

    pub async fn methods(&self) -> Result<Vec<ShippingMethod>, ApiError> {
        match &self.db {
            Some(pool) => Ok(db::list_methods(pool).await?),
            None => Ok(self.catalog.as_ref().clone()),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/v1/shipping/options", post(handlers::shipping_options))
        .route("/api/v1/shipping/quote", post(handlers::checkout_quote))
        .route("/api/v1/shipping/options-with-addons", post(handlers::addon_quote))
        .route("/api/v1/shipping/methods", get(handlers::list_methods))
        .route("/api/v1/shipping/methods/:id", put(handlers::update_method))
        .layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()).with_state(state)
}
