use std::panic::Location;

use error_location::ErrorLocation;
use folio_core::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Row decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ValidationErrors> for DbError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
