//! Error handling middleware and utilities.
//!
//! Converts application errors into standardized HTTP responses while
//! keeping internal failure detail out of the wire format.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Maps an application error to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } | AppError::EmptyCatalog => StatusCode::NOT_FOUND,
        AppError::DuplicateGenres { .. }
        | AppError::NoGenresRemoved
        | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::Store { .. } | AppError::Cache { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Maps an application error to its machine-readable error code.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } | AppError::EmptyCatalog => "NOT_FOUND",
        AppError::DuplicateGenres { .. } => "DUPLICATE_GENRES",
        AppError::NoGenresRemoved => "NO_GENRES_REMOVED",
        AppError::Validation { .. } => "VALIDATION_ERROR",
        AppError::Store { .. } => "STORE_ERROR",
        AppError::Cache { .. } => "CACHE_ERROR",
        AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let code = error_to_code(&self);

        // Infrastructure failures are logged in full and reported generically.
        let body = match &self {
            AppError::DuplicateGenres { genres } => {
                ErrorResponse::new(code, &self.to_string())
                    .with_details(json!({ "duplicates": genres }))
            }
            AppError::Store { operation, source } => {
                error!(operation = %operation, error = %source, "Store operation failed");
                ErrorResponse::new(code, "A storage error occurred")
            }
            AppError::Cache { operation, source } => {
                error!(operation = %operation, error = %source, "Cache operation failed");
                ErrorResponse::new(code, "A cache error occurred")
            }
            AppError::Internal { source } => {
                error!(error = %source, "Internal error");
                ErrorResponse::new(code, "An internal error occurred")
            }
            _ => ErrorResponse::new(code, &self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
