use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::Result;

mod passages;
mod schema;

pub use schema::PASSAGES_TABLE;

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
    embedding_dimension: usize,
}

impl Database {
    #[must_use]
    pub const fn new(pool: PgPool, embedding_dimension: usize) -> Self {
        Self {
            pool,
            embedding_dimension,
        }
    }

    /// Create a new database instance from configuration
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(Duration::from_secs(config.connection_timeout()))
            .connect(config.database_url())
            .await?;

        tracing::info!(
            "Database pool configured: max_connections={}, min_connections={}",
            config.max_connections(),
            config.min_connections()
        );

        Ok(Self::new(pool, config.embedding_dimension()))
    }

    /// Get a reference to the database pool for raw queries
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    #[must_use]
    pub const fn embedding_dimension(&self) -> usize {
        self.embedding_dimension
    }
}
