//! HTTP client for the generation endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::config::LlmConfig;
use crate::config::ProviderKind;
use crate::errors::NocError;
use crate::errors::Result;
use crate::llm::TextGenerator;

/// Generation client, built once at start-up and shared across requests
#[derive(Debug, Clone)]
pub struct LlmService {
    provider: ProviderKind,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: usize,
    client: Client,
}

impl LlmService {
    /// Create a new LLM service from application config
    ///
    /// # Errors
    /// - Missing API key for a hosted provider
    /// - HTTP client build errors
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::from_llm_config(&config.llm)
    }

    pub fn from_llm_config(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
            .cloned();

        if config.provider.requires_api_key() && api_key.is_none() {
            return Err(NocError::ConfigError(format!(
                "LLM provider '{}' requires an API key",
                config.provider
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| NocError::HttpError(e.to_string()))?;

        Ok(Self {
            provider: config.provider,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }

    pub const fn provider(&self) -> ProviderKind {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a completion with explicit sampling parameters
    ///
    /// # Errors
    /// - Network errors (timeouts, connection failures)
    /// - Non-success status codes (quota, authentication, invalid model)
    /// - Responses without any generated text
    pub async fn generate_with_params(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        debug!(
            "Calling {} model {} ({} prompt chars)",
            self.provider,
            self.model,
            prompt.len()
        );

        match self.provider {
            ProviderKind::Gemini => self.generate_gemini(prompt, temperature, max_tokens).await,
            ProviderKind::OpenAI => self.generate_openai(prompt, temperature, max_tokens).await,
            ProviderKind::Ollama => self.generate_ollama(prompt, temperature, max_tokens).await,
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            NocError::ConfigError(format!("{} API key not provided", self.provider))
        })
    }

    async fn generate_gemini(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct GeminiRequest<'a> {
            contents: Vec<GeminiContent<'a>>,
            generation_config: GenerationConfig,
        }

        #[derive(Serialize)]
        struct GeminiContent<'a> {
            parts: Vec<GeminiPart<'a>>,
        }

        #[derive(Serialize)]
        struct GeminiPart<'a> {
            text: &'a str,
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct GenerationConfig {
            temperature: f32,
            max_output_tokens: usize,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct GeminiResponse {
            #[serde(default)]
            candidates: Vec<Candidate>,
            prompt_feedback: Option<PromptFeedback>,
        }

        #[derive(Deserialize)]
        struct Candidate {
            content: Option<CandidateContent>,
        }

        #[derive(Deserialize)]
        struct CandidateContent {
            #[serde(default)]
            parts: Vec<CandidatePart>,
        }

        #[derive(Deserialize)]
        struct CandidatePart {
            text: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct PromptFeedback {
            block_reason: Option<String>,
        }

        let api_key = self.api_key()?;
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens: max_tokens,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NocError::LlmError(format!(
                "Gemini API error ({status}): {error_text}"
            )));
        }

        let result: GeminiResponse = response
            .json()
            .await
            .map_err(|e| NocError::LlmError(format!("Failed to parse response: {e}")))?;

        let text: String = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            let reason = result
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(NocError::LlmError(format!(
                "Gemini returned no text: {reason}"
            )));
        }

        Ok(text)
    }

    async fn generate_openai(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct ChatRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage<'a>>,
            temperature: f32,
            max_tokens: usize,
        }

        #[derive(Serialize)]
        struct ChatMessage<'a> {
            role: &'a str,
            content: &'a str,
        }

        #[derive(Deserialize)]
        struct ChatResponse {
            #[serde(default)]
            choices: Vec<Choice>,
        }

        #[derive(Deserialize)]
        struct Choice {
            message: ChoiceMessage,
        }

        #[derive(Deserialize)]
        struct ChoiceMessage {
            content: Option<String>,
        }

        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.endpoint);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NocError::LlmError(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| NocError::LlmError(format!("Failed to parse response: {e}")))?;

        result
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| NocError::LlmError("No completion in response".to_string()))
    }

    async fn generate_ollama(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            prompt: &'a str,
            stream: bool,
            options: OllamaOptions,
        }

        #[derive(Serialize)]
        struct OllamaOptions {
            temperature: f32,
            num_predict: usize,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            response: String,
        }

        let url = format!("{}/api/generate", self.endpoint);

        let request = OllamaRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: OllamaOptions {
                temperature,
                num_predict: max_tokens,
            },
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NocError::LlmError(format!(
                "Ollama API error ({status}): {error_text}"
            )));
        }

        let result: OllamaResponse = response
            .json()
            .await
            .map_err(|e| NocError::LlmError(format!("Failed to parse response: {e}")))?;

        Ok(result.response)
    }
}

#[async_trait]
impl TextGenerator for LlmService {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_params(prompt, self.temperature, self.max_tokens)
            .await
    }
}
