//! Text generation against a hosted or local language model
//!
//! The composer only depends on [`TextGenerator`]; [`LlmService`] is the
//! production implementation speaking the Gemini, OpenAI-compatible and
//! Ollama HTTP APIs.

pub mod service;

use async_trait::async_trait;

pub use service::LlmService;

use crate::errors::Result;

/// Single-shot, non-streaming completion
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
