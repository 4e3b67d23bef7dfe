use serde::Deserialize;

/// Request body for creating a Pokédex entry.
///
/// Every field is optional at the deserialization layer so that missing
/// required fields surface as a 400 with an explicit message from the
/// handler's presence check, not as a body rejection.
#[derive(Debug, Deserialize)]
pub struct CreatePokemonRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Option<PokemonTypesRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PokemonTypesRequest {
    #[serde(default)]
    pub type_1: Option<String>,
    #[serde(default)]
    pub type_2: Option<String>,
}
