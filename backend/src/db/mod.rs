//! PostgreSQL pool management for the `postgres` storage backend

use crate::config::StorageConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Create a pool from the storage section of the app config
pub async fn create_pool(storage: &StorageConfig) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&storage.database_url)?
        .application_name("fitpro");

    let pool = PgPoolOptions::new()
        .max_connections(storage.max_connections)
        .acquire_timeout(Duration::from_secs(storage.acquire_timeout_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        max_connections = storage.max_connections,
        "Database pool created"
    );

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
