use folio_core::Pokemon;

use serde::Serialize;

/// Pokémon DTO for JSON serialization; types ride in a nested object.
#[derive(Debug, Serialize)]
pub struct PokemonDto {
    pub id: String,
    pub name: String,
    pub types: PokemonTypesDto,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Serialize)]
pub struct PokemonTypesDto {
    pub type_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_2: Option<String>,
}

impl From<Pokemon> for PokemonDto {
    fn from(p: Pokemon) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            types: PokemonTypesDto {
                type_1: p.type_1,
                type_2: p.type_2,
            },
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
