//! Error handling for the Mavuno market feed
//!
//! Provides consistent error responses in English and Swahili

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ModelError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_sw: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Model errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Field-level validation failure with a Swahili translation
    pub fn validation(field: &str, message: &str, message_sw: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            message_sw: message_sw.to_string(),
        }
    }
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
    pub message_sw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message, message_sw } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_sw: message_sw.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_sw: format!("{} haikupatikana", resource),
                    field: None,
                },
            ),
            AppError::Model(ModelError::NonPositivePrice(price)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "NON_POSITIVE_PRICE".to_string(),
                    message_en: format!("Current price must be positive, got {}", price),
                    message_sw: format!(
                        "Bei ya sasa lazima iwe zaidi ya sifuri, imepokelewa {}",
                        price
                    ),
                    field: Some("current_price".to_string()),
                },
            ),
            AppError::Model(ModelError::DateOutOfRange { days }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "DATE_OUT_OF_RANGE".to_string(),
                    message_en: format!(
                        "A window of {} days falls outside the supported calendar",
                        days
                    ),
                    message_sw: format!(
                        "Kipindi cha siku {} kiko nje ya kalenda inayotumika",
                        days
                    ),
                    field: Some("days".to_string()),
                },
            ),
            AppError::Model(ModelError::EmptyForecast) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "EMPTY_FORECAST".to_string(),
                    message_en: "Forecast contains no predictions".to_string(),
                    message_sw: "Utabiri hauna makadirio yoyote".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_sw: "Hitilafu ya ndani ya seva".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
