use crate::PokemonDto;

use serde::Serialize;

/// Collection envelope; `count` always matches `data.len()`
#[derive(Debug, Serialize)]
pub struct PokemonListResponse {
    pub success: bool,
    pub data: Vec<PokemonDto>,
    pub count: usize,
}
