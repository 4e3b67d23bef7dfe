pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

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
