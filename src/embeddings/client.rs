//! Embedding API clients for various providers

use std::time::Duration;

use futures::stream;
use futures::stream::StreamExt;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::config::EmbeddingsConfig;
use crate::config::ProviderKind;
use crate::errors::NocError;
use crate::errors::Result;

/// Parallel single-text requests for providers without a batch endpoint
const OLLAMA_CONCURRENCY: usize = 8;

/// Client for generating embeddings from various providers
pub struct EmbeddingClient {
    provider: ProviderKind,
    model: String,
    endpoint: String,
    api_key: Option<String>,
    dimension: usize,
    client: Client,
}

impl EmbeddingClient {
    /// Create a new embedding client from application config
    ///
    /// # Errors
    /// - Missing API key for a hosted provider
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::from_embeddings_config(&config.embeddings, config.llm.request_timeout_secs)
    }

    pub fn from_embeddings_config(config: &EmbeddingsConfig, timeout_secs: u64) -> Result<Self> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
            .cloned();

        if config.provider.requires_api_key() && api_key.is_none() {
            return Err(NocError::ConfigError(format!(
                "Embedding provider '{}' requires an API key",
                config.provider
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| NocError::HttpError(e.to_string()))?;

        Ok(Self {
            provider: config.provider,
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            dimension: config.dimension,
            client,
        })
    }

    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Generate embedding for a single text
    ///
    /// # Errors
    /// - API request failures (network errors, timeouts, authentication failures)
    /// - Invalid API responses (malformed JSON, wrong embedding dimensions)
    pub async fn generate(&self, text: &str) -> Result<Vec<f32>> {
        let embedding = match self.provider {
            ProviderKind::Gemini => self.generate_gemini(text).await?,
            ProviderKind::OpenAI => self
                .generate_batch_openai(&[text.to_string()])
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| NocError::EmbeddingError("No embedding in response".to_string()))?,
            ProviderKind::Ollama => self.generate_ollama(text).await?,
        };

        self.check_dimension(&embedding)?;
        Ok(embedding)
    }

    /// Generate embeddings for multiple texts in batch, preserving order
    ///
    /// # Errors
    /// - API request failures (network errors, timeouts, authentication failures)
    /// - Invalid API responses (malformed JSON, count or dimension mismatches)
    pub async fn generate_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let embeddings = match self.provider {
            ProviderKind::Gemini => self.generate_batch_gemini(texts).await?,
            ProviderKind::OpenAI => self.generate_batch_openai(texts).await?,
            ProviderKind::Ollama => {
                // Ollama doesn't support batch, so we fan out single requests
                let results: Vec<Result<Vec<f32>>> = stream::iter(texts.iter())
                    .map(|text| async move { self.generate_ollama(text).await })
                    .buffered(OLLAMA_CONCURRENCY)
                    .collect()
                    .await;

                results.into_iter().collect::<Result<Vec<_>>>()?
            }
        };

        if embeddings.len() != texts.len() {
            return Err(NocError::EmbeddingError(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            )));
        }
        for embedding in &embeddings {
            self.check_dimension(embedding)?;
        }

        Ok(embeddings)
    }

    fn check_dimension(&self, embedding: &[f32]) -> Result<()> {
        if embedding.len() == self.dimension {
            Ok(())
        } else {
            Err(NocError::EmbeddingError(format!(
                "Embedding dimension mismatch: expected {}, got {}",
                self.dimension,
                embedding.len()
            )))
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            NocError::ConfigError(format!("{} API key not provided", self.provider))
        })
    }

    /// `models/<name>` as the Gemini request body expects it
    fn gemini_model_path(&self) -> String {
        if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        }
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
        provider_label: &str,
    ) -> Result<reqwest::Response> {
        let mut request = self.client.post(url).json(body);
        request = match self.provider {
            ProviderKind::Gemini => request.header("x-goog-api-key", self.api_key()?),
            ProviderKind::OpenAI => {
                request.header("Authorization", format!("Bearer {}", self.api_key()?))
            }
            ProviderKind::Ollama => request,
        };

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NocError::EmbeddingError(format!(
                "{provider_label} API error ({status}): {error_text}"
            )));
        }

        Ok(response)
    }

    /// Generate embedding using the Gemini `embedContent` API
    async fn generate_gemini(&self, text: &str) -> Result<Vec<f32>> {
        #[derive(Deserialize)]
        struct GeminiResponse {
            embedding: GeminiEmbedding,
        }

        let model = self.gemini_model_path();
        let url = format!("{}/{}:embedContent", self.endpoint, model);
        debug!("Calling Gemini embeddings API: {}", url);

        let request = GeminiEmbedRequest {
            model: &model,
            content: GeminiContent {
                parts: vec![GeminiPart { text }],
            },
        };

        let result: GeminiResponse = self
            .post_json(&url, &request, "Gemini")
            .await?
            .json()
            .await
            .map_err(|e| NocError::EmbeddingError(format!("Failed to parse response: {e}")))?;

        Ok(result.embedding.values)
    }

    /// Generate embeddings in batch using the Gemini `batchEmbedContents` API
    async fn generate_batch_gemini(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        #[derive(Serialize)]
        struct GeminiBatchRequest<'a> {
            requests: Vec<GeminiEmbedRequest<'a>>,
        }

        #[derive(Deserialize)]
        struct GeminiBatchResponse {
            #[serde(default)]
            embeddings: Vec<GeminiEmbedding>,
        }

        let model = self.gemini_model_path();
        let url = format!("{}/{}:batchEmbedContents", self.endpoint, model);
        debug!("Calling Gemini batch embeddings API: {} items", texts.len());

        let request = GeminiBatchRequest {
            requests: texts
                .iter()
                .map(|text| GeminiEmbedRequest {
                    model: &model,
                    content: GeminiContent {
                        parts: vec![GeminiPart { text }],
                    },
                })
                .collect(),
        };

        let result: GeminiBatchResponse = self
            .post_json(&url, &request, "Gemini")
            .await?
            .json()
            .await
            .map_err(|e| NocError::EmbeddingError(format!("Failed to parse response: {e}")))?;

        Ok(result.embeddings.into_iter().map(|e| e.values).collect())
    }

    /// Generate embeddings in batch using `OpenAI` API
    async fn generate_batch_openai(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        #[derive(Serialize)]
        struct OpenAIBatchRequest<'a> {
            input: &'a [String],
            model: &'a str,
        }

        #[derive(Deserialize)]
        struct OpenAIResponse {
            data: Vec<EmbeddingData>,
        }

        #[derive(Deserialize)]
        struct EmbeddingData {
            embedding: Vec<f32>,
        }

        let url = format!("{}/embeddings", self.endpoint);
        debug!("Calling OpenAI batch embeddings API: {} items", texts.len());

        let request = OpenAIBatchRequest {
            input: texts,
            model: &self.model,
        };

        let result: OpenAIResponse = self
            .post_json(&url, &request, "OpenAI")
            .await?
            .json()
            .await
            .map_err(|e| NocError::EmbeddingError(format!("Failed to parse response: {e}")))?;

        Ok(result.data.into_iter().map(|d| d.embedding).collect())
    }

    /// Generate embedding using Ollama API
    async fn generate_ollama(&self, text: &str) -> Result<Vec<f32>> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            prompt: &'a str,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            embedding: Vec<f32>,
        }

        let url = format!("{}/api/embeddings", self.endpoint);
        debug!("Calling Ollama embeddings API: {}", url);

        let request = OllamaRequest {
            model: &self.model,
            prompt: text,
        };

        let result: OllamaResponse = self
            .post_json(&url, &request, "Ollama")
            .await?
            .json()
            .await
            .map_err(|e| NocError::EmbeddingError(format!("Failed to parse response: {e}")))?;

        Ok(result.embedding)
    }
}

#[derive(Serialize)]
struct GeminiEmbedRequest<'a> {
    model: &'a str,
    content: GeminiContent<'a>,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GeminiEmbedding {
    values: Vec<f32>,
}
