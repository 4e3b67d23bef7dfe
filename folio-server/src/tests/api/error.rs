use crate::ApiError;

use folio_core::validation::validate_pokemon;
use folio_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_not_found_renders_404_envelope() {
    let (status, json) = body_json(ApiError::NotFound {
        message: "Pokemon not found".to_string(),
        location: location(),
    })
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Pokemon not found");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_bad_request_renders_400() {
    let (status, json) = body_json(ApiError::BadRequest {
        message: "name and primary type are required".to_string(),
        location: location(),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_validation_carries_field_details() {
    let errors = validate_pokemon("Mu", "Electric", None).unwrap_err();
    let (status, json) = body_json(ApiError::from(DbError::Validation(errors))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid data");
    assert_eq!(json["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_db_errors_render_generic_500() {
    let (status, json) = body_json(ApiError::from(DbError::from(sqlx::Error::PoolClosed))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database operation failed");
}

#[tokio::test]
async fn test_malformed_uuid_renders_400() {
    let parse_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let (status, json) = body_json(ApiError::from(parse_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid id format"));
}
