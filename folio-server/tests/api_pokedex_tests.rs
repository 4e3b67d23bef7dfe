//! Integration tests for Pokédex API handlers
mod common;

use crate::common::{body_json, create_test_context, json_request, request};

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use folio_server::routes::build_router;

#[tokio::test]
async fn test_list_pokemon_empty() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let response = app
        .oneshot(request("GET", "/api/v1/pokedex"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_create_pokemon_returns_201_with_envelope() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/pokedex",
            json!({"name": "Pikachu", "types": {"type_1": "Electric"}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Pokemon created successfully");
    assert_eq!(json["data"]["name"], "Pikachu");
    assert_eq!(json["data"]["types"]["type_1"], "Electric");
    assert!(json["data"]["types"].get("type_2").is_none());
    assert!(json["data"]["id"].as_str().is_some());
}

#[tokio::test]
async fn test_create_pokemon_missing_fields_is_400() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/pokedex",
            json!({"name": "Pikachu"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "name and primary type are required");
}

#[tokio::test]
async fn test_create_pokemon_short_name_is_400_with_details() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/pokedex",
            json!({"name": "Mu", "types": {"type_1": "Psychic"}}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid data");
    assert_eq!(json["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let created = body_json(
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/pokedex",
                json!({"name": "Bulbasaur", "types": {"type_1": "Grass", "type_2": "Poison"}}),
            ))
            .await
            .unwrap(),
    )
    .await;

    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .oneshot(request("GET", &format!("/api/v1/pokedex/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["name"], "Bulbasaur");
    assert_eq!(json["data"]["types"]["type_2"], "Poison");
}

#[tokio::test]
async fn test_get_pokemon_not_found() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let response = app
        .oneshot(request(
            "GET",
            &format!("/api/v1/pokedex/{}", Uuid::new_v4()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Pokemon not found");
}

#[tokio::test]
async fn test_get_pokemon_malformed_id_is_400() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let response = app
        .oneshot(request("GET", "/api/v1/pokedex/not-a-uuid"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_pokemon_partial() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let created = body_json(
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/pokedex",
                json!({"name": "Charmander", "types": {"type_1": "Fire"}}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/pokedex/{}", id),
            json!({"name": "Charmeleon"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Pokemon updated successfully");
    assert_eq!(json["data"]["name"], "Charmeleon");
    // Untouched field survives
    assert_eq!(json["data"]["types"]["type_1"], "Fire");
}

#[tokio::test]
async fn test_update_pokemon_invalid_name_is_400() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let created = body_json(
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/pokedex",
                json!({"name": "Squirtle", "types": {"type_1": "Water"}}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/pokedex/{}", id),
            json!({"name": "Mu"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_update_pokemon_not_found() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/pokedex/{}", Uuid::new_v4()),
            json!({"name": "Missingno"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_pokemon_lifecycle() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    let created = body_json(
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/pokedex",
                json!({"name": "Eevee", "types": {"type_1": "Normal"}}),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request("DELETE", &format!("/api/v1/pokedex/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Pokemon deleted successfully");

    // Gone now: both GET and DELETE report not-found
    let response = app
        .clone()
        .oneshot(request("GET", &format!("/api/v1/pokedex/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request("DELETE", &format!("/api/v1/pokedex/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_pokemon_count_matches() {
    let ctx = create_test_context();
    let app = build_router(ctx.state.clone());

    for name in ["Abra", "Kadabra", "Alakazam"] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/pokedex",
                json!({"name": name, "types": {"type_1": "Psychic"}}),
            ))
            .await
            .unwrap();
    }

    let json = body_json(
        app.oneshot(request("GET", "/api/v1/pokedex")).await.unwrap(),
    )
    .await;

    assert_eq!(json["count"], 3);
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}
