use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::ShippingError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Shipping(#[from] ShippingError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Shipping method {0} not found")]
    RecordNotFound(String),

    #[error("Catalog updates require a database")]
    ReadOnlyCatalog,

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Shipping(ShippingError::CutoffExceeded { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Shipping(ShippingError::FeeOutOfRange(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Shipping(ShippingError::UnknownStrategyCode(_)) => StatusCode::BAD_REQUEST,
            Self::Shipping(ShippingError::InvalidContext { .. }) => StatusCode::BAD_REQUEST,
            Self::Shipping(ShippingError::MethodNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RecordNotFound(_) => StatusCode::NOT_FOUND,
            Self::ReadOnlyCatalog => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Shipping(ShippingError::CutoffExceeded { .. }) => "CUTOFF_EXCEEDED",
            Self::Shipping(ShippingError::UnknownStrategyCode(_)) => "UNKNOWN_STRATEGY_CODE",
            Self::Shipping(ShippingError::FeeOutOfRange(_)) => "FEE_OUT_OF_RANGE",
            Self::Shipping(ShippingError::InvalidContext { .. }) | Self::Validation(_) => "VALIDATION_ERROR",
            Self::Shipping(ShippingError::MethodNotFound(_)) | Self::RecordNotFound(_) => "METHOD_NOT_FOUND",
            Self::ReadOnlyCatalog => "READ_ONLY_CATALOG",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.error_code(), "message": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cutoff = ApiError::from(ShippingError::CutoffExceeded { cutoff_hour: 14 });
        assert_eq!(cutoff.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(cutoff.error_code(), "CUTOFF_EXCEEDED");

        let unknown = ApiError::from(ShippingError::UnknownStrategyCode("X".into()));
        assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);

        assert_eq!(ApiError::ReadOnlyCatalog.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ApiError::RecordNotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
    }
}
