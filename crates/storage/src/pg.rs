//! PostgreSQL storage backend using sqlx.

use async_trait::async_trait;
use pokedex_core::{CreatePokemon, Pokemon, UpdatePokemon};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::migrations::run_migrations;
use crate::traits::PokemonStore;
use crate::StorageError;

const POKEMON_COLUMNS: &str = "id, no, name, types";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connects a bounded pool and applies schema migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new().max_connections(8).connect(database_url).await?;
        run_migrations(&pool).await?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

fn row_to_pokemon(row: &sqlx::postgres::PgRow) -> Result<Pokemon, StorageError> {
    Ok(Pokemon {
        id: row.try_get("id").map_err(StorageError::from)?,
        no: row.try_get("no").map_err(StorageError::from)?,
        name: row.try_get("name").map_err(StorageError::from)?,
        types: row.try_get("types").map_err(StorageError::from)?,
    })
}

#[async_trait]
impl PokemonStore for PgStorage {
    async fn insert(&self, input: &CreatePokemon) -> Result<Pokemon, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO pokemons (id, no, name, types) VALUES ($1, $2, $3, $4)
             RETURNING {POKEMON_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(input.no)
        .bind(&input.name)
        .bind(&input.types)
        .fetch_one(&self.pool)
        .await?;
        row_to_pokemon(&row)
    }

    async fn find_by_no(&self, no: i32) -> Result<Option<Pokemon>, StorageError> {
        let row = sqlx::query(&format!("SELECT {POKEMON_COLUMNS} FROM pokemons WHERE no = $1"))
            .bind(no)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_pokemon).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, StorageError> {
        let row = sqlx::query(&format!("SELECT {POKEMON_COLUMNS} FROM pokemons WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_pokemon).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, StorageError> {
        let row = sqlx::query(&format!("SELECT {POKEMON_COLUMNS} FROM pokemons WHERE name = $1"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_pokemon).transpose()
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Pokemon>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {POKEMON_COLUMNS} FROM pokemons ORDER BY no ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_pokemon).collect()
    }

    async fn update(&self, id: Uuid, patch: &UpdatePokemon) -> Result<Pokemon, StorageError> {
        // Single statement: partial merge via COALESCE, revision bump, and
        // the post-update row returned without a second read.
        let row = sqlx::query(&format!(
            "UPDATE pokemons
             SET no = COALESCE($2, no),
                 name = COALESCE($3, name),
                 types = COALESCE($4, types),
                 revision = revision + 1
             WHERE id = $1
             RETURNING {POKEMON_COLUMNS}"
        ))
        .bind(id)
        .bind(patch.no)
        .bind(patch.name.as_deref())
        .bind(patch.types.as_ref())
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => row_to_pokemon(&row),
            None => Err(StorageError::NotFound { entity: "pokemon", id: id.to_string() }),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM pokemons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM pokemons").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn insert_many(&self, inputs: &[CreatePokemon]) -> Result<Vec<Uuid>, StorageError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = inputs.iter().map(|_| Uuid::new_v4()).collect();
        let nos: Vec<i32> = inputs.iter().map(|p| p.no).collect();
        let names: Vec<String> = inputs.iter().map(|p| p.name.clone()).collect();
        let types: Vec<serde_json::Value> = inputs.iter().map(|p| p.types.clone()).collect();

        // One multi-row INSERT: a duplicate anywhere aborts the whole
        // statement, so a failed batch inserts nothing.
        sqlx::query(
            "INSERT INTO pokemons (id, no, name, types)
             SELECT * FROM UNNEST($1::uuid[], $2::int4[], $3::text[], $4::jsonb[])",
        )
        .bind(&ids)
        .bind(&nos)
        .bind(&names)
        .bind(&types)
        .execute(&self.pool)
        .await?;

        Ok(ids)
    }
}
