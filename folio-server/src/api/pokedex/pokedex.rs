//! Pokédex REST API handlers
//!
//! Each handler acquires the shared pool from the injected connection
//! manager, performs exactly one repository call, and wraps the result in
//! the uniform response envelope. The create handler runs a required-field
//! presence check before delegating; the repository re-validates the full
//! constraint set on the write path.

use crate::api::present;
use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreatePokemonRequest, DeleteResponse, PokemonListResponse,
    PokemonResponse, UpdatePokemonRequest,
};

use folio_core::{NewPokemon, PokemonPatch};
use folio_db::PokemonRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/pokedex
///
/// List all Pokédex entries
pub async fn list_pokemon(State(state): State<AppState>) -> ApiResult<Json<PokemonListResponse>> {
    let repo = PokemonRepository::new(state.db.acquire().await?);
    let pokemon = repo.find_all().await?;

    // Count mirrors the returned data rather than a second query, so the
    // two can never disagree
    let data: Vec<_> = pokemon.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(PokemonListResponse {
        success: true,
        data,
        count,
    }))
}

/// POST /api/v1/pokedex
///
/// Create a new Pokédex entry
pub async fn create_pokemon(
    State(state): State<AppState>,
    Json(req): Json<CreatePokemonRequest>,
) -> ApiResult<(StatusCode, Json<PokemonResponse>)> {
    // Presence pre-check; constraint validation happens on the write path
    let name = present(req.name.as_deref());
    let type_1 = present(req.types.as_ref().and_then(|t| t.type_1.as_deref()));

    let (Some(name), Some(type_1)) = (name, type_1) else {
        return Err(ApiError::BadRequest {
            message: "name and primary type are required".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let repo = PokemonRepository::new(state.db.acquire().await?);
    let pokemon = repo
        .create(&NewPokemon {
            name: name.to_string(),
            type_1: type_1.to_string(),
            type_2: req.types.as_ref().and_then(|t| t.type_2.clone()),
        })
        .await?;

    log::info!("Created pokedex entry {}", pokemon.id);

    Ok((
        StatusCode::CREATED,
        Json(PokemonResponse {
            success: true,
            data: pokemon.into(),
            message: Some("Pokemon created successfully".to_string()),
        }),
    ))
}

/// GET /api/v1/pokedex/{id}
///
/// Get a single Pokédex entry by id
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PokemonResponse>> {
    let pokemon_id = Uuid::parse_str(&id)?;

    let repo = PokemonRepository::new(state.db.acquire().await?);
    let pokemon = repo
        .find_by_id(pokemon_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "Pokemon not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(PokemonResponse {
        success: true,
        data: pokemon.into(),
        message: None,
    }))
}

/// PUT /api/v1/pokedex/{id}
///
/// Apply a partial update to a Pokédex entry
pub async fn update_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePokemonRequest>,
) -> ApiResult<Json<PokemonResponse>> {
    let pokemon_id = Uuid::parse_str(&id)?;
    let patch = PokemonPatch::from(req);

    let repo = PokemonRepository::new(state.db.acquire().await?);
    let pokemon = repo
        .update(pokemon_id, &patch)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "Pokemon not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    log::info!("Updated pokedex entry {}", pokemon.id);

    Ok(Json(PokemonResponse {
        success: true,
        data: pokemon.into(),
        message: Some("Pokemon updated successfully".to_string()),
    }))
}

/// DELETE /api/v1/pokedex/{id}
///
/// Remove a Pokédex entry
pub async fn delete_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let pokemon_id = Uuid::parse_str(&id)?;

    let repo = PokemonRepository::new(state.db.acquire().await?);
    let deleted = repo.delete(pokemon_id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: "Pokemon not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted pokedex entry {}", pokemon_id);

    Ok(Json(DeleteResponse {
        success: true,
        message: "Pokemon deleted successfully".to_string(),
    }))
}
