//! Schema migrations. Idempotent: safe to run on every startup.

use anyhow::Result;
use sqlx::SqlitePool;

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS strings (
            id TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            length INTEGER NOT NULL,
            is_palindrome INTEGER NOT NULL,
            unique_characters INTEGER NOT NULL,
            word_count INTEGER NOT NULL,
            sha256_hash TEXT NOT NULL,
            character_frequency_json TEXT NOT NULL DEFAULT '{}',
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Case-insensitive value lookups go through LOWER(value)
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_strings_value_folded ON strings(LOWER(value))")
        .execute(pool)
        .await?;

    Ok(())
}
