use super::Database;
use crate::Result;

/// Table holding the indexed manual passages
pub const PASSAGES_TABLE: &str = "manual_passages";

impl Database {
    /// Check whether the passage table exists
    pub async fn is_schema_initialized(&self) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS (
                SELECT FROM information_schema.tables
                WHERE table_schema = 'public'
                AND table_name = $1
            )
            ",
        )
        .bind(PASSAGES_TABLE)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            tracing::debug!("Missing required table: {}", PASSAGES_TABLE);
        }
        Ok(exists)
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
            .execute(&self.pool)
            .await?;

        // Dimension is a type modifier and cannot be bound as a parameter
        let create_table = format!(
            r"
            CREATE TABLE IF NOT EXISTS {PASSAGES_TABLE} (
                id UUID PRIMARY KEY,
                title TEXT,
                category TEXT,
                error_code TEXT,
                content TEXT NOT NULL,
                embedding VECTOR({dimension}) NOT NULL,
                ingested_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            ",
            dimension = self.embedding_dimension
        );
        sqlx::query(&create_table).execute(&self.pool).await?;

        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{PASSAGES_TABLE}_error_code ON {PASSAGES_TABLE}(error_code)"
        ))
        .execute(&self.pool)
        .await?;

        tracing::info!(
            "Schema ready: {} (embedding dimension {})",
            PASSAGES_TABLE,
            self.embedding_dimension
        );
        Ok(())
    }

    /// Drop the passage table and create it again empty
    pub async fn rebuild_schema(&self) -> Result<()> {
        tracing::warn!("Dropping table {}", PASSAGES_TABLE);
        sqlx::query(&format!("DROP TABLE IF EXISTS {PASSAGES_TABLE}"))
            .execute(&self.pool)
            .await?;
        self.init_schema().await
    }
}
