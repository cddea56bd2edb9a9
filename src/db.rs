use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Builds the connection pool shared by every request
pub async fn connect_sqlx(db_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(2))
        .connect(db_url)
        .await
}

/// Creates the todo table if the database doesn't have it yet
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS todo (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            expiration_date TIMESTAMPTZ NOT NULL,
            percentage_of_completion INTEGER NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await?;
    info!("Todo schema is ready");

    Ok(())
}
