use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Creates and returns a SQLite connection pool, creating the database file if needed.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Connecting to SQLite at {database_url}...");

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the `skills` and `trainings` tables if they do not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trainings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            skill_name TEXT NOT NULL,
            course_name TEXT NOT NULL,
            provider TEXT NOT NULL,
            level TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Not unique: duplicate trainings per skill are allowed.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_trainings_skill_name ON trainings (skill_name)")
        .execute(pool)
        .await?;

    info!("Catalog schema ensured");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    // A single long-lived connection; each new in-memory connection is a fresh database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_schema_is_repeatable() {
        let pool = memory_pool().await;
        ensure_schema(&pool).await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('skills', 'trainings') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["skills".to_string(), "trainings".to_string()]);
    }

    #[tokio::test]
    async fn test_create_pool_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.db");
        let url = format!("sqlite://{}", path.display());

        let pool = create_pool(&url).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        assert!(path.exists());
    }
}
