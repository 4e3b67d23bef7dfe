//! REST API error types
//!
//! These errors produce the uniform `{success: false, error, details?}`
//! envelope with the appropriate HTTP status codes. Full error detail is
//! logged server-side; 500 responses carry only a generic message.

use folio_core::ValidationErrors;
use folio_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error envelope body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    /// Human-readable error message
    pub error: String,
    /// Field errors for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValidationErrors>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400), optionally with per-field details
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        details: Option<ValidationErrors>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, error, details) = match self {
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, message, None),
            ApiError::Validation {
                message, details, ..
            } => (StatusCode::BAD_REQUEST, message, details),
            ApiError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                error,
                details,
            }),
        )
            .into_response()
    }
}

/// Convert UUID parse errors to API errors (malformed ids are client errors)
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid id format: {}", e),
            details: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Validation(errors) => ApiError::Validation {
                message: "Invalid data".to_string(),
                details: Some(errors),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
