//! Database connection management

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{config::StoreConfig, error::AppError};

/// Create a new database connection pool
pub async fn create_pool(config: &StoreConfig) -> Result<PgPool, AppError> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| AppError::Configuration("DATABASE_URL is not set".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await?;

    Ok(pool)
}

/// Test database connection
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
