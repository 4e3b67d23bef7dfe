use crate::PokemonTypesRequest;

use folio_core::PokemonPatch;

use serde::Deserialize;

/// Request body for updating a Pokédex entry; absent fields are untouched.
#[derive(Debug, Deserialize)]
pub struct UpdatePokemonRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Option<PokemonTypesRequest>,
}

impl From<UpdatePokemonRequest> for PokemonPatch {
    fn from(req: UpdatePokemonRequest) -> Self {
        let (type_1, type_2) = match req.types {
            Some(types) => (types.type_1, types.type_2),
            None => (None, None),
        };

        PokemonPatch {
            name: req.name,
            type_1,
            type_2,
        }
    }
}
