//! PostgreSQL schema migrations, run once at connect.
//!
//! Inline UNIQUE constraints give the engine-assigned names
//! (`pokemons_no_key`, `pokemons_name_key`) that duplicate-key translation
//! relies on. `revision` is internal version metadata and is never selected
//! into the domain type.

use sqlx::PgPool;

use crate::StorageError;

pub(crate) async fn run_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pokemons (
            id UUID PRIMARY KEY,
            no INTEGER NOT NULL UNIQUE CHECK (no > 0),
            name TEXT NOT NULL UNIQUE,
            types JSONB NOT NULL DEFAULT '[]',
            revision INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(e.to_string()))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_pokemons_no ON pokemons (no ASC)")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;

    tracing::debug!("schema migrations applied");
    Ok(())
}
