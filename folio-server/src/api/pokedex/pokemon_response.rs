use crate::PokemonDto;

use serde::Serialize;

/// Single Pokémon envelope
#[derive(Debug, Serialize)]
pub struct PokemonResponse {
    pub success: bool,
    pub data: PokemonDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
