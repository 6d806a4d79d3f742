use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NocError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Retrieval error: {0}")]
    RetrievalError(String),

    #[error("Embedding error: {0}")]
    EmbeddingError(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Ingestion error: {0}")]
    IngestError(String),

    #[error("Manual file not found at {}", .0.display())]
    ManualNotFound(PathBuf),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl From<reqwest::Error> for NocError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NocError>;
