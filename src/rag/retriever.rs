//! Retrieval module for vector search and hybrid reranking

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::database::Database;
use crate::embeddings::EmbeddingClient;
use crate::errors::Result;
use crate::models::Passage;
use crate::rag::codes::normalize_code;
use crate::rag::codes::query_codes;
use crate::rag::PassageRetriever;

/// Retriever backed by the pgvector passage table
pub struct VectorRetriever {
    database: Arc<Database>,
    embedding_client: Arc<EmbeddingClient>,
}

impl VectorRetriever {
    /// Create a new retriever
    pub fn new(database: Arc<Database>, embedding_client: Arc<EmbeddingClient>) -> Self {
        Self {
            database,
            embedding_client,
        }
    }
}

#[async_trait]
impl PassageRetriever for VectorRetriever {
    async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<Passage>> {
        debug!("Performing semantic search (k={}): {}", k, query);

        let query_embedding = self.embedding_client.generate(query).await?;
        let passages = self
            .database
            .similarity_search(query_embedding, k as i64)
            .await?;

        debug!("Vector index returned {} passages", passages.len());
        Ok(passages)
    }
}

/// Promotes passages that mention an error code from the query
#[derive(Debug, Clone, Copy)]
pub struct HybridReranker {
    top_n: usize,
}

impl HybridReranker {
    #[must_use]
    pub const fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub const fn top_n(&self) -> usize {
        self.top_n
    }

    /// Stable partition of `raw`: passages containing any query code first.
    ///
    /// A query without codes returns `raw` untouched. Matching is substring
    /// containment over the normalized content + metadata text, so `S304`
    /// also matches a passage tagged `S-3041`.
    // TODO: offer whole-token matching once short codes (e.g. "E1") start
    // pulling in unrelated passages.
    pub fn partition_by_codes(&self, raw: Vec<Passage>, query: &str) -> Vec<Passage> {
        let codes = query_codes(query);
        if codes.is_empty() {
            return raw;
        }

        debug!(
            "Detected error codes in query: {}",
            codes.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        );

        let (matches, others): (Vec<Passage>, Vec<Passage>) =
            raw.into_iter().partition(|passage| {
                let blob = normalize_code(&passage.search_text());
                codes.iter().any(|code| code.found_in(&blob))
            });

        debug!(
            "Keyword boost: {} matching, {} other passages",
            matches.len(),
            others.len()
        );

        matches.into_iter().chain(others).collect()
    }

    /// Partition then keep the first `top_n`
    pub fn rerank(&self, raw: Vec<Passage>, query: &str) -> Vec<Passage> {
        let mut ranked = self.partition_by_codes(raw, query);
        ranked.truncate(self.top_n);
        ranked
    }
}

impl Default for HybridReranker {
    fn default() -> Self {
        Self::new(crate::config::default_top_n())
    }
}
