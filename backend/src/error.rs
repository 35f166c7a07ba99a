//! Error handling for the mowing check server
//!
//! Every failure is terminal for its request and maps to one JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

const FALLBACK_MESSAGE: &str = "Failed to process mowing check";

pub const METHOD_NOT_ALLOWED_MESSAGE: &str =
    "Please use POST method with a JSON payload containing \"location\"";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    // Pipeline errors
    #[error("{0}")]
    LocationNotFound(String),

    #[error("{0}")]
    UpstreamFetch(String),

    // Internal errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    fn status_and_label(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Invalid request", "VALIDATION_ERROR"),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed",
                "METHOD_NOT_ALLOWED",
            ),
            AppError::LocationNotFound(_) => {
                (StatusCode::NOT_FOUND, "Location not found", "LOCATION_NOT_FOUND")
            }
            AppError::UpstreamFetch(_) => {
                (StatusCode::BAD_GATEWAY, "Server error", "UPSTREAM_FETCH_FAILED")
            }
            AppError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error",
                "CONFIGURATION_ERROR",
            ),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            other => match other.to_string() {
                message if message.is_empty() => FALLBACK_MESSAGE.to_string(),
                message => message,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, code) = self.status_and_label();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        let body = ErrorResponse {
            success: false,
            error,
            code,
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
