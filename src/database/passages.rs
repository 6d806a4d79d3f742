use pgvector::Vector;
use uuid::Uuid;

use super::Database;
use crate::models::Passage;
use crate::models::PassageMetadata;
use crate::Result;

#[derive(sqlx::FromRow)]
struct PassageRow {
    title: Option<String>,
    category: Option<String>,
    error_code: Option<String>,
    content: String,
}

impl From<PassageRow> for Passage {
    fn from(row: PassageRow) -> Self {
        Self::new(
            row.content,
            PassageMetadata {
                title: row.title,
                category: row.category,
                error_code: row.error_code,
            },
        )
    }
}

impl Database {
    /// Insert passages with their embeddings in a single transaction
    pub async fn insert_passages(&self, passages: &[(Passage, Vec<f32>)]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for (passage, embedding) in passages {
            let result = sqlx::query(
                r"
                INSERT INTO manual_passages (id, title, category, error_code, content, embedding)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(Uuid::new_v4())
            .bind(&passage.metadata.title)
            .bind(&passage.metadata.category)
            .bind(&passage.metadata.error_code)
            .bind(&passage.content)
            .bind(Vector::from(embedding.clone()))
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn count_passages(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM manual_passages")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Nearest passages by cosine distance, closest first
    pub async fn similarity_search(
        &self,
        query_embedding: Vec<f32>,
        limit: i64,
    ) -> Result<Vec<Passage>> {
        let rows = sqlx::query_as::<_, PassageRow>(
            r"
            SELECT title, category, error_code, content
            FROM manual_passages
            ORDER BY embedding <=> $1
            LIMIT $2
            ",
        )
        .bind(Vector::from(query_embedding))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Passage::from).collect())
    }
}
