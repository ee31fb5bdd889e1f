/**
 * Server Configuration
 *
 * This module handles loading the server's configuration from the
 * environment and establishing the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `SERVER_PORT` - listen port, defaults to 3000
 *
 * A missing or unreachable database is a startup failure; every endpoint
 * is a database operation.
 */

use sqlx::PgPool;

/// Errors that can keep the server from starting
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connect to the database and bring the schema up to date
///
/// Reads `DATABASE_URL`, builds the pool, and runs the bundled
/// migrations. Any failure aborts startup.
pub async fn load_database() -> Result<PgPool, ConfigError> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        tracing::error!("DATABASE_URL not set");
        ConfigError::MissingDatabaseUrl
    })?;

    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(&database_url)
        .await
        .map_err(ConfigError::Connect)?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}

/// Read the listen port from the environment
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000)
}
