//! Persistence layer for the `movies` table.
//!
//! Exposes pool construction, the embedded migration, and the
//! [`repositories::MovieRepo`] CRUD primitives.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Errors raised while reading database configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum DbConfigError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,

    #[error("DB_MAX_CONNECTIONS must be a valid u32, got '{0}'")]
    InvalidMaxConnections(String),
}

/// Connection settings for the database pool.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    /// Pool size (default: `10`).
    pub max_connections: u32,
}

impl DbConfig {
    /// Load from `DATABASE_URL` and `DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, DbConfigError> {
        let url = std::env::var("DATABASE_URL").map_err(|_| DbConfigError::MissingUrl)?;

        let max_connections = match std::env::var("DB_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| DbConfigError::InvalidMaxConnections(raw))?,
            Err(_) => 10,
        };

        Ok(Self {
            url,
            max_connections,
        })
    }
}

/// Create a connection pool from the given configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections = config.max_connections, "Creating database pool");
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
