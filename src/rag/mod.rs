//! RAG (Retrieval-Augmented Generation) module
//!
//! This module provides the grounded answering path for alarm queries:
//! - Vector retrieval of manual passages
//! - Hybrid reranking that promotes exact error-code matches
//! - Bounded context assembly from the top passages
//! - Grounded and baseline answer composition
//!
//! # Examples
//!
//! ```rust,no_run
//! use noc_oracle::config::AppConfig;
//! use noc_oracle::rag::NocEngine;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load_from(None)?;
//!     let engine = NocEngine::from_config(&config).await?;
//!
//!     let result = engine.get_solution("How do I fix S-304 on the Orbit-5G?").await;
//!     println!("Answer: {}", result.answer);
//!     println!("Sources: {} passages", result.sources.len());
//!
//!     Ok(())
//! }
//! ```

pub mod codes;
pub mod context;
pub mod pipeline;
pub mod prompts;
pub mod retriever;

use async_trait::async_trait;

pub use codes::extract_error_codes;
pub use codes::normalize_code;
pub use codes::ErrorCode;
pub use context::ContextAssembler;
pub use pipeline::NocEngine;
pub use pipeline::BASELINE_ERROR_MARKER;
pub use pipeline::NO_CONTEXT_MESSAGE;
pub use pipeline::SOLUTION_ERROR_MARKER;
pub use retriever::HybridReranker;
pub use retriever::VectorRetriever;

use crate::errors::Result;
use crate::models::Passage;

/// Nearest-neighbour search over the manual index
#[async_trait]
pub trait PassageRetriever: Send + Sync {
    /// Up to `k` passages, best-effort ordered by relevance
    async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<Passage>>;
}
