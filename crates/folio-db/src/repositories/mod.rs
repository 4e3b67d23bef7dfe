pub mod pokemon_repository;
pub mod project_repository;

use crate::{DbError, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Decode a stored unix timestamp, with the column name for context.
#[track_caller]
pub(crate) fn decode_timestamp(secs: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Decode {
        message: format!("Invalid timestamp in {}: {}", column, secs),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Decode a stored UUID, with the column name for context.
#[track_caller]
pub(crate) fn decode_uuid(value: &str, column: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
