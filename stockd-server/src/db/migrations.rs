//! Schema bootstrap for the stocks table

use sqlx::PgPool;

/// Create the stocks table if it does not exist yet.
///
/// One-time DDL, idempotent across restarts. The id is a store-assigned
/// surrogate key; the application never writes it.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stocks (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            company TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
