//! Manual ingestion: split the markdown manual, embed each passage and
//! rebuild the vector index from scratch.

pub mod splitter;

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;
use tracing::info;

pub use splitter::enrich_with_headers;
pub use splitter::MarkdownHeaderSplitter;

use crate::config::AppConfig;
use crate::database::Database;
use crate::embeddings::EmbeddingClient;
use crate::errors::NocError;
use crate::errors::Result;
use crate::models::Passage;

/// Summary of one ingestion run
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub passages: usize,
    pub categories: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl IngestReport {
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Split and enrich a manual without touching the index
#[must_use]
pub fn prepare_passages(markdown: &str) -> Vec<Passage> {
    MarkdownHeaderSplitter::new()
        .split(markdown)
        .into_iter()
        .map(enrich_with_headers)
        .collect()
}

pub struct Ingestor {
    database: Arc<Database>,
    embedding_client: Arc<EmbeddingClient>,
    batch_size: usize,
}

impl Ingestor {
    pub fn new(
        database: Arc<Database>,
        embedding_client: Arc<EmbeddingClient>,
        batch_size: usize,
    ) -> Self {
        Self {
            database,
            embedding_client,
            batch_size: batch_size.max(1),
        }
    }

    /// # Errors
    /// - Invalid configuration
    /// - Database connection errors
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let embedding_client = Arc::new(EmbeddingClient::new(config)?);
        let database = Arc::new(Database::from_config(config).await?);
        Ok(Self::new(
            database,
            embedding_client,
            config.embeddings.batch_size,
        ))
    }

    /// Replace the whole index with the passages of `manual_path`.
    ///
    /// The manual is read and split before the table is dropped, so a missing
    /// or empty manual leaves the existing index untouched.
    ///
    /// # Errors
    /// - `ManualNotFound` if the file does not exist
    /// - `IngestError` if the manual yields no passages
    /// - Embedding or database failures
    pub async fn run(&self, manual_path: &Path) -> Result<IngestReport> {
        let started_at = Utc::now();

        if !tokio::fs::try_exists(manual_path).await.unwrap_or(false) {
            return Err(NocError::ManualNotFound(manual_path.to_path_buf()));
        }

        info!("Loading manual from {}", manual_path.display());
        let markdown = tokio::fs::read_to_string(manual_path).await?;

        let passages = prepare_passages(&markdown);
        if passages.is_empty() {
            return Err(NocError::IngestError(format!(
                "No passages found in {}",
                manual_path.display()
            )));
        }
        info!("Split manual into {} passages", passages.len());

        let categories = passages
            .iter()
            .filter_map(|p| p.metadata.category.as_deref())
            .collect::<BTreeSet<_>>()
            .len();

        self.database.rebuild_schema().await?;

        let total_batches = passages.len().div_ceil(self.batch_size);
        for (batch_idx, chunk) in passages.chunks(self.batch_size).enumerate() {
            info!(
                "Embedding batch {}/{} ({} passages)",
                batch_idx + 1,
                total_batches,
                chunk.len()
            );

            let texts: Vec<String> = chunk.iter().map(|p| p.content.clone()).collect();
            let embeddings = self.embedding_client.generate_batch(&texts).await?;

            let rows: Vec<(Passage, Vec<f32>)> =
                chunk.iter().cloned().zip(embeddings).collect();
            let inserted = self.database.insert_passages(&rows).await?;
            debug!("Inserted {} rows", inserted);
        }

        let report = IngestReport {
            passages: passages.len(),
            categories,
            started_at,
            finished_at: Utc::now(),
        };
        info!(
            "Ingestion complete: {} passages across {} categories",
            report.passages, report.categories
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_passages_enriches_every_passage() {
        let markdown = "# Guide\n## Hardware Alarms\n### E-101: Power Unit Failure\nReplace the PSU.\n";
        let passages = prepare_passages(markdown);
        assert_eq!(passages.len(), 1);
        assert!(passages[0]
            .content
            .starts_with("Hardware Alarms - E-101: Power Unit Failure\n\n"));
        assert!(passages[0].content.ends_with("Replace the PSU."));
    }

    #[test]
    fn test_prepare_passages_empty_manual() {
        assert!(prepare_passages("").is_empty());
        assert!(prepare_passages("# Title only\n").is_empty());
    }
}
