//! Pokémon entity - a Pokédex entry with a primary and optional secondary type.

use crate::models;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted Pokédex entry.
///
/// Identifiers and timestamps are owned by the write layer: the repository
/// assigns them on create and bumps `updated_at` on every mutation. Clients
/// can never set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: Uuid,
    pub name: String,
    /// Primary type, e.g. "Electric"
    pub type_1: String,
    /// Optional secondary type
    pub type_2: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pokemon {
    /// Build a fresh entry with a new id and current timestamps.
    pub fn new(name: String, type_1: String, type_2: Option<String>) -> Self {
        let now = models::now();
        Self {
            id: Uuid::new_v4(),
            name,
            type_1,
            type_2,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; untouched fields keep their prior values.
    /// `updated_at` is bumped unconditionally, even for an empty patch.
    pub fn apply(&mut self, patch: &PokemonPatch) {
        if let Some(ref name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(ref type_1) = patch.type_1 {
            self.type_1 = type_1.trim().to_string();
        }
        if let Some(ref type_2) = patch.type_2 {
            self.type_2 = Some(type_2.trim().to_string());
        }
        self.updated_at = models::now();
    }
}

/// Input for creating a Pokédex entry.
#[derive(Debug, Clone)]
pub struct NewPokemon {
    pub name: String,
    pub type_1: String,
    pub type_2: Option<String>,
}

/// Partial update; `None` fields are left untouched.
/// There is no way to clear `type_2` once set.
#[derive(Debug, Clone, Default)]
pub struct PokemonPatch {
    pub name: Option<String>,
    pub type_1: Option<String>,
    pub type_2: Option<String>,
}

impl PokemonPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.type_1.is_none() && self.type_2.is_none()
    }
}
