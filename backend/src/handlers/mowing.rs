//! HTTP handlers for the mowing check endpoint

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Deserialize;
use shared::{validate_location_input, MowingCheckResponse, LOCATION_REQUIRED};
use validator::{Validate, ValidationError};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Request body for a mowing check
#[derive(Debug, Deserialize, Validate)]
pub struct CheckMowingRequest {
    /// Town, city or postcode
    #[validate(required, custom = "validate_location")]
    pub location: Option<String>,
}

fn validate_location(location: &str) -> Result<(), ValidationError> {
    validate_location_input(location)
        .map(|_| ())
        .map_err(|_| ValidationError::new("blank_location"))
}

/// Check whether it is a good time to mow at a location
pub async fn check_mowing(
    State(state): State<AppState>,
    payload: Result<Json<CheckMowingRequest>, JsonRejection>,
) -> AppResult<Json<MowingCheckResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable request body: {}", rejection);
        AppError::Validation(LOCATION_REQUIRED.to_string())
    })?;

    request
        .validate()
        .map_err(|_| AppError::Validation(LOCATION_REQUIRED.to_string()))?;

    let location = request.location.unwrap_or_default();
    let response = state.mowing.check(&location).await?;
    Ok(Json(response))
}

/// Preflight requests are answered with an empty 200
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on the check endpoint
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
