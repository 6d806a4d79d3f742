//! NOC-Oracle: runbook answers for telecom alarms, grounded in the
//! troubleshooting manual and reranked on exact error-code matches.

pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod embeddings;
pub mod errors;
pub mod ingest;
pub mod llm;
pub mod logging;
pub mod manual;
pub mod models;
pub mod rag;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod errors_tests;

pub use config::AppConfig;
pub use errors::*;
