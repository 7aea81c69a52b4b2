//! Aggregates module
pub mod shipping_method;

pub use shipping_method::ShippingMethod;
