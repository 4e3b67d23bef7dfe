use crate::health;
use crate::state::AppState;
use crate::{
    create_pokemon, create_project, delete_pokemon, delete_project, get_pokemon, get_project,
    list_pokemon, list_projects, update_pokemon, update_project,
};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pokédex resource
        .route("/api/v1/pokedex", get(list_pokemon).post(create_pokemon))
        .route(
            "/api/v1/pokedex/{id}",
            get(get_pokemon).put(update_pokemon).delete(delete_pokemon),
        )
        // Projects resource
        .route("/api/v1/projects", get(list_projects).post(create_project))
        .route(
            "/api/v1/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (the pages are served from a separate origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
