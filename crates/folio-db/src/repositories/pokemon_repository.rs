//! Pokédex repository for CRUD operations on Pokémon entries.
//!
//! The repository owns identifiers and timestamps: `create` assigns both,
//! `update` bumps `updated_at`, and clients never set either. Every write
//! path trims string fields and runs the shared validation before touching
//! the database, so an invalid record is never persisted.

use crate::repositories::{decode_timestamp, decode_uuid};
use crate::Result as DbErrorResult;

use folio_core::{NewPokemon, Pokemon, PokemonPatch, validation};

use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct PokemonRow {
    id: String,
    name: String,
    type_1: String,
    type_2: Option<String>,
    created_at: i64,
    updated_at: i64,
}

/// Explicit mapping from the stored representation to the public record.
fn map_row(row: PokemonRow) -> DbErrorResult<Pokemon> {
    Ok(Pokemon {
        id: decode_uuid(&row.id, "pokedex.id")?,
        name: row.name,
        type_1: row.type_1,
        type_2: row.type_2,
        created_at: decode_timestamp(row.created_at, "pokedex.created_at")?,
        updated_at: decode_timestamp(row.updated_at, "pokedex.updated_at")?,
    })
}

pub struct PokemonRepository {
    pool: SqlitePool,
}

impl PokemonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All entries in storage order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Pokemon>> {
        let rows = sqlx::query_as::<_, PokemonRow>(
            r#"
                SELECT id, name, type_1, type_2, created_at, updated_at
                FROM pokedex
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_row).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Pokemon>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, PokemonRow>(
            r#"
                SELECT id, name, type_1, type_2, created_at, updated_at
                FROM pokedex
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_row).transpose()
    }

    /// Validates, persists, and returns the stored record with its
    /// assigned id and timestamps.
    pub async fn create(&self, input: &NewPokemon) -> DbErrorResult<Pokemon> {
        let name = input.name.trim();
        let type_1 = input.type_1.trim();
        let type_2 = input
            .type_2
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        validation::validate_pokemon(name, type_1, type_2)?;

        let pokemon = Pokemon::new(
            name.to_string(),
            type_1.to_string(),
            type_2.map(String::from),
        );

        sqlx::query(
            r#"
                INSERT INTO pokedex (id, name, type_1, type_2, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(pokemon.id.to_string())
        .bind(&pokemon.name)
        .bind(&pokemon.type_1)
        .bind(&pokemon.type_2)
        .bind(pokemon.created_at.timestamp())
        .bind(pokemon.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(pokemon)
    }

    /// Applies only the provided fields, re-validates the result, and
    /// returns the updated record, or `None` for an unknown id.
    pub async fn update(&self, id: Uuid, patch: &PokemonPatch) -> DbErrorResult<Option<Pokemon>> {
        let Some(mut pokemon) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        pokemon.apply(patch);

        validation::validate_pokemon(&pokemon.name, &pokemon.type_1, pokemon.type_2.as_deref())?;

        let result = sqlx::query(
            r#"
                UPDATE pokedex
                SET name = ?, type_1 = ?, type_2 = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&pokemon.name)
        .bind(&pokemon.type_1)
        .bind(&pokemon.type_2)
        .bind(pokemon.updated_at.timestamp())
        .bind(pokemon.id.to_string())
        .execute(&self.pool)
        .await?;

        // The row can vanish between the read and this write
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(pokemon))
    }

    /// Returns whether a row was removed; an already-absent id is `false`,
    /// never an error.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM pokedex WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pokedex")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
