//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Registration not found: {0}")]
    RegistrationNotFound(String),

    #[error("Event '{event_name}' not found for registration {registration_id}")]
    EventNotFound {
        registration_id: String,
        event_name: String,
    },

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    // Store errors
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    // Internal errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::RegistrationNotFound(_) => "REGISTRATION_NOT_FOUND",
            Self::EventNotFound { .. } => "EVENT_NOT_FOUND",
            Self::DuplicateKey(_) => "DUPLICATE_KEY",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RegistrationNotFound(_) | Self::EventNotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateKey(_) => StatusCode::CONFLICT,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log store errors but don't expose details to clients
        let message = match &self {
            AppError::StoreUnavailable(e) => {
                tracing::error!("Store error: {}", e);
                "The registration store is unavailable".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => {
                AppError::RegistrationNotFound("Registration not found".to_string())
            }
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    AppError::DuplicateKey(
                        db_err
                            .constraint()
                            .unwrap_or("registration_id")
                            .to_string(),
                    )
                } else {
                    AppError::StoreUnavailable(db_err.to_string())
                }
            }
            _ => AppError::StoreUnavailable(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
