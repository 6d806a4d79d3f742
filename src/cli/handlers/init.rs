//! Database initialization handler

use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::database::Database;
use crate::database::PASSAGES_TABLE;
use crate::AppConfig;
use crate::Result;

/// Handle database initialization command
pub async fn handle_init_command(config: &AppConfig) -> Result<()> {
    print_info("🗄️  Initializing NOC-Oracle database...");

    let database = Database::from_config(config).await?;
    if let Err(e) = database.init_schema().await {
        if e.to_string().contains("vector") || e.to_string().contains("extension") {
            print_warning(&format!("Could not enable pgvector extension: {e}"));
            println!("  Run as a superuser: CREATE EXTENSION IF NOT EXISTS vector;");
            println!("  Then run: noc-oracle init");
        }
        return Err(e);
    }

    let passages = database.count_passages().await?;
    print_success(&format!(
        "Table {PASSAGES_TABLE} ready ({} dimensions, {passages} passages indexed)",
        config.embedding_dimension()
    ));
    if passages == 0 {
        println!("  Next: noc-oracle ingest");
    }
    Ok(())
}
