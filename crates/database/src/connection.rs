use crate::error::DbError;
use configuration::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::env;
use std::time::Duration;

/// Builds the PostgreSQL connection pool without opening a connection.
///
/// This function reads `DATABASE_URL` (loading a `.env` file first if one exists)
/// and configures the pool from `config`. Connections are established on first use,
/// so an unreachable server surfaces as a failed fetch rather than a startup error.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    // A missing .env file is fine; the variable may come from the real environment.
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_e| DbError::ConnectionConfigError("DATABASE_URL must be set.".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(&database_url)?;

    Ok(pool)
}

/// A utility function to apply the bundled schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
