//! Embeddings generation module
//!
//! This module provides text embeddings for manual passages and queries using:
//! - Gemini (text-embedding-004)
//! - OpenAI (text-embedding-3-small, etc.)
//! - Ollama (local models)
//!
//! # Examples
//!
//! ```rust,no_run
//! use noc_oracle::config::AppConfig;
//! use noc_oracle::embeddings::EmbeddingClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load_from(None)?;
//!     let client = EmbeddingClient::new(&config)?;
//!
//!     let embedding = client.generate("S-304 fiber link degradation").await?;
//!     println!("Generated embedding with {} dimensions", embedding.len());
//!
//!     Ok(())
//! }
//! ```

pub mod client;

pub use client::EmbeddingClient;
