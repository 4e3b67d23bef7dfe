pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    pokedex::{
        create_pokemon_request::{CreatePokemonRequest, PokemonTypesRequest},
        pokedex::{create_pokemon, delete_pokemon, get_pokemon, list_pokemon, update_pokemon},
        pokemon_dto::{PokemonDto, PokemonTypesDto},
        pokemon_list_response::PokemonListResponse,
        pokemon_response::PokemonResponse,
        update_pokemon_request::UpdatePokemonRequest,
    },
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_list_response::ProjectListResponse,
        project_response::ProjectResponse,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use folio_db::{ConnectionManager, ConnectionSettings};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env before config: DATABASE_URL usually lives there
    dotenvy::dotenv().ok();

    // Load and validate configuration; a missing connection string is
    // fatal here, before anything binds or connects
    let config = folio_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = folio_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting folio-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // The connection manager is constructed once and injected; the pool
    // itself is created lazily on the first request that needs it
    let settings = ConnectionSettings {
        url: config.database.require_url()?.to_string(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        acquire_timeout: Duration::from_secs(config.database.acquire_timeout_secs),
        busy_timeout: Duration::from_secs(config.database.busy_timeout_secs),
    };
    let db = Arc::new(ConnectionManager::new(settings));

    let app = build_router(AppState { db: db.clone() });

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    // Pool lifecycle is tied to the process: tear it down on the way out
    db.release().await;
    info!("Shutdown complete");

    Ok(())
}
