//! Mini E-commerce Shipping
//!
//! Shipping fee engine and quoting service for a small e-commerce backend.
//!
//! ## Features
//! - Interchangeable fee formulas (Standard, Express, Same-Day, Eco)
//! - Stackable surcharges (insurance, gift wrapping, signature, priority, weekend)
//! - Per-method parameter blobs with silent fallback to defaults
//! - Option listing, checkout quotes and add-on quotes over a method catalog
//! - HTTP API over the catalog (axum), optional Postgres storage (sqlx)

use thiserror::Error;

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod service;
pub mod shipping;

pub use domain::aggregates::ShippingMethod;
pub use shipping::{
    AddOn, OrderContext, ShippingDecorator, ShippingMethodCode, ShippingStrategy, Surcharge,
    WeekendDay,
};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShippingError {
    #[error("Same-day delivery not available after {cutoff_hour}:00. Please choose another shipping method.")]
    CutoffExceeded { cutoff_hour: u32 },

    #[error("Unknown shipping strategy: {0}")]
    UnknownStrategyCode(String),

    #[error("Shipping method '{0}' not found or inactive")]
    MethodNotFound(String),

    #[error("Invalid order context: {field} must be a non-negative number within the supported range")]
    InvalidContext { field: &'static str },

    #[error("Shipping fee for {0} is outside the supported amount range")]
    FeeOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, ShippingError>;
