//! Hand-written collaborators for exercising the engine without a database or LLM

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use noc_oracle::llm::TextGenerator;
use noc_oracle::models::Passage;
use noc_oracle::models::PassageMetadata;
use noc_oracle::rag::NocEngine;
use noc_oracle::rag::PassageRetriever;
use noc_oracle::NocError;
use noc_oracle::Result;

/// Retriever returning a fixed list, or a fixed failure
pub struct FakeRetriever {
    passages: Vec<Passage>,
    failure: Option<String>,
    requested_k: Mutex<Vec<usize>>,
}

impl FakeRetriever {
    pub fn with_passages(passages: Vec<Passage>) -> Self {
        Self {
            passages,
            failure: None,
            requested_k: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            passages: Vec::new(),
            failure: Some(message.to_string()),
            requested_k: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_k(&self) -> Vec<usize> {
        self.requested_k.lock().unwrap().clone()
    }
}

#[async_trait]
impl PassageRetriever for FakeRetriever {
    async fn similarity_search(&self, _query: &str, k: usize) -> Result<Vec<Passage>> {
        self.requested_k.lock().unwrap().push(k);
        match &self.failure {
            Some(message) => Err(NocError::Custom(message.clone())),
            None => Ok(self.passages.iter().take(k).cloned().collect()),
        }
    }
}

/// Generator that records every prompt and answers with a canned reply
pub struct RecordingGenerator {
    reply: String,
    failure: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            failure: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: String::new(),
            failure: Some(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.failure {
            Some(message) => Err(NocError::LlmError(message.clone())),
            None => Ok(self.reply.clone()),
        }
    }
}

/// An enriched manual passage the way ingestion stores it
pub fn manual_passage(category: &str, code: &str, body: &str) -> Passage {
    Passage::new(
        format!("{category} - {code}\n\n{body}"),
        PassageMetadata::new(Some("Orbit-5G Guide"), Some(category), Some(code)),
    )
}

pub fn e101() -> Passage {
    manual_passage(
        "Hardware Alarms",
        "E-101: Power Unit Failure",
        "Power supply issue detected. Check voltage at TP4.",
    )
}

pub fn s304() -> Passage {
    manual_passage(
        "Software Alarms",
        "S-304: Fiber Link Degradation",
        "Signal loss detected. Clean fiber connectors.",
    )
}

pub fn engine(
    retriever: Arc<FakeRetriever>,
    generator: Arc<RecordingGenerator>,
) -> NocEngine {
    NocEngine::new(retriever, generator)
}
