//! Error handling for the iScan API
//!
//! Provides consistent error responses in English and Russian

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::external::GatewayError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_ru: String,
    },

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    // External service errors
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_ru: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound { barcode } => AppError::ProductNotFound(barcode),
            GatewayError::Transient(message) => AppError::UpstreamUnavailable(message),
        }
    }
}

impl AppError {
    /// Status code returned for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Validation {
                field,
                message,
                message_ru,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_ru: message_ru.clone(),
                field: Some(field.clone()),
            },
            AppError::ProductNotFound(barcode) => ErrorDetail {
                code: "PRODUCT_NOT_FOUND".to_string(),
                message_en: format!("Product with barcode {} not found", barcode),
                message_ru: format!("Продукт со штрихкодом {} не найден", barcode),
                field: None,
            },
            AppError::UpstreamUnavailable(msg) => ErrorDetail {
                code: "UPSTREAM_UNAVAILABLE".to_string(),
                message_en: format!("Product database is unavailable: {}", msg),
                message_ru: "База данных продуктов временно недоступна".to_string(),
                field: None,
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message_en: format!("Configuration error: {}", msg),
                message_ru: "Ошибка конфигурации сервера".to_string(),
                field: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_detail = self.detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_errors_map_to_statuses() {
        let not_found = AppError::from(GatewayError::NotFound {
            barcode: "123".to_string(),
        });
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.detail().code, "PRODUCT_NOT_FOUND");

        let transient = AppError::from(GatewayError::Transient("timeout".to_string()));
        assert_eq!(transient.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(transient.detail().code, "UPSTREAM_UNAVAILABLE");
    }

    #[test]
    fn test_configuration_error_is_server_error() {
        let err = AppError::Configuration("bad client".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let detail = err.detail();
        assert_eq!(detail.code, "CONFIGURATION_ERROR");
        assert!(detail.field.is_none());
    }
}
