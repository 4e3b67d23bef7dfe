pub mod create_pokemon_request;
pub mod pokedex;
pub mod pokemon_dto;
pub mod pokemon_list_response;
pub mod pokemon_response;
pub mod update_pokemon_request;
