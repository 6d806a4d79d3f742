//! Grounded answering pipeline: Retrieve -> Rerank -> Assemble -> Generate

use std::sync::Arc;

use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::config::AppConfig;
use crate::config::RetrievalConfig;
use crate::database::Database;
use crate::embeddings::EmbeddingClient;
use crate::errors::NocError;
use crate::errors::Result;
use crate::llm::LlmService;
use crate::llm::TextGenerator;
use crate::models::FailureKind;
use crate::models::SolutionResult;
use crate::rag::prompts::build_baseline_prompt;
use crate::rag::prompts::build_grounded_prompt;
use crate::rag::ContextAssembler;
use crate::rag::HybridReranker;
use crate::rag::PassageRetriever;
use crate::rag::VectorRetriever;

/// Prefix of the answer when the grounded path fails
pub const SOLUTION_ERROR_MARKER: &str = "Error processing request: ";
/// Prefix of the answer when the baseline path fails
pub const BASELINE_ERROR_MARKER: &str = "Error generating baseline: ";
/// Answer returned when the index has nothing for the query
pub const NO_CONTEXT_MESSAGE: &str = "No relevant information found.";

/// Answers alarm queries from the indexed manual, with an ungrounded baseline for comparison
pub struct NocEngine {
    retriever: Arc<dyn PassageRetriever>,
    generator: Arc<dyn TextGenerator>,
    reranker: HybridReranker,
    context_assembler: ContextAssembler,
    fan_out: usize,
}

impl NocEngine {
    /// Create an engine over existing collaborators with default retrieval settings
    pub fn new(retriever: Arc<dyn PassageRetriever>, generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_retrieval_config(retriever, generator, &RetrievalConfig::default())
    }

    pub fn with_retrieval_config(
        retriever: Arc<dyn PassageRetriever>,
        generator: Arc<dyn TextGenerator>,
        config: &RetrievalConfig,
    ) -> Self {
        Self {
            retriever,
            generator,
            reranker: HybridReranker::new(config.top_n),
            context_assembler: ContextAssembler::new(config.max_context_length),
            fan_out: config.fan_out,
        }
    }

    /// Build the production engine: pgvector retrieval and the configured LLM
    ///
    /// # Errors
    /// - Invalid configuration (missing API keys, malformed endpoints)
    /// - Database connection errors
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let embedding_client = Arc::new(EmbeddingClient::new(config)?);
        let llm_service = Arc::new(LlmService::new(config)?);
        let database = Arc::new(Database::from_config(config).await?);
        let retriever = Arc::new(VectorRetriever::new(database, embedding_client));

        info!(
            "NOC engine ready: llm={} ({}), fan_out={}, top_n={}",
            llm_service.provider(),
            llm_service.model(),
            config.retrieval.fan_out,
            config.retrieval.top_n
        );

        Ok(Self::with_retrieval_config(
            retriever,
            llm_service,
            &config.retrieval,
        ))
    }

    pub const fn fan_out(&self) -> usize {
        self.fan_out
    }

    pub const fn top_n(&self) -> usize {
        self.reranker.top_n()
    }

    /// Answer `query` from the manual.
    ///
    /// Never fails: collaborator errors come back as a `Failed` result whose
    /// answer starts with [`SOLUTION_ERROR_MARKER`].
    pub async fn get_solution(&self, query: &str) -> SolutionResult {
        info!("Processing solution query: {}", query);

        debug!("Step 1: Retrieving {} candidate passages", self.fan_out);
        let raw = match self.retriever.similarity_search(query, self.fan_out).await {
            Ok(passages) => passages,
            Err(e) => {
                error!("Retrieval failed: {}", e);
                return SolutionResult::failed(
                    failure_kind(FailureKind::Retrieval, &e),
                    format!("{SOLUTION_ERROR_MARKER}{e}"),
                );
            }
        };
        debug!("Retrieved {} passages", raw.len());

        debug!("Step 2: Reranking");
        let ranked = self.reranker.rerank(raw, query);
        if ranked.is_empty() {
            warn!("No passages found for query");
            return SolutionResult::no_context(NO_CONTEXT_MESSAGE);
        }

        debug!("Step 3: Assembling context from {} passages", ranked.len());
        let (context, included) = self.context_assembler.assemble_with_count(&ranked);
        let prompt = build_grounded_prompt(query, &context);
        debug!("Grounded prompt:\n{}", prompt);

        debug!("Step 4: Generating answer");
        match self.generator.generate(&prompt).await {
            Ok(answer) => {
                info!("Solution generated from {} passages", included);
                let mut sources = ranked;
                sources.truncate(included);
                SolutionResult::grounded(answer, sources)
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                SolutionResult::failed(
                    failure_kind(FailureKind::Generation, &e),
                    format!("{SOLUTION_ERROR_MARKER}{e}"),
                )
            }
        }
    }

    /// Answer `query` without any manual context, for side-by-side comparison
    pub async fn get_baseline_response(&self, query: &str) -> String {
        match self.try_baseline(query).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("Baseline generation failed: {}", e);
                format!("{BASELINE_ERROR_MARKER}{e}")
            }
        }
    }

    /// Baseline answer with the generator error left intact
    pub async fn try_baseline(&self, query: &str) -> Result<String> {
        info!("Processing baseline query: {}", query);
        let prompt = build_baseline_prompt(query);
        self.generator.generate(&prompt).await
    }
}

/// Configuration errors surfacing mid-request keep their own kind
fn failure_kind(stage: FailureKind, error: &NocError) -> FailureKind {
    match error {
        NocError::ConfigError(_) => FailureKind::Configuration,
        _ => stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_follows_stage() {
        let err = NocError::Custom("DB Connection Failed".to_string());
        assert_eq!(failure_kind(FailureKind::Retrieval, &err), FailureKind::Retrieval);
        assert_eq!(failure_kind(FailureKind::Generation, &err), FailureKind::Generation);
    }

    #[test]
    fn test_config_error_is_configuration_failure() {
        let err = NocError::ConfigError("Gemini API key not provided".to_string());
        assert_eq!(
            failure_kind(FailureKind::Generation, &err),
            FailureKind::Configuration
        );
    }
}
