//! CLI command handlers module
//!
//! - init: schema creation
//! - ingest: manual ingestion into the vector index
//! - manual: sample manual generation
//! - ask: grounded answers with optional baseline comparison
//! - serve: API server
//! - info: configuration display

pub mod ask;
pub mod info;
pub mod ingest;
pub mod init;
pub mod manual;
pub mod serve;

pub use ask::*;
pub use info::*;
pub use ingest::*;
pub use init::*;
pub use manual::*;
pub use serve::*;
