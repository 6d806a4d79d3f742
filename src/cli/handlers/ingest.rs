//! Manual ingestion handler

use std::path::PathBuf;

use crate::cli::output::print_info;
use crate::cli::output::print_ingest_report;
use crate::ingest::Ingestor;
use crate::AppConfig;
use crate::Result;

pub async fn handle_ingest_command(config: &AppConfig, manual: Option<PathBuf>) -> Result<()> {
    let manual_path = manual.unwrap_or_else(|| config.manual_path().to_path_buf());
    print_info(&format!(
        "📖 Rebuilding index from {}",
        manual_path.display()
    ));

    let ingestor = Ingestor::from_config(config).await?;
    let report = ingestor.run(&manual_path).await?;
    print_ingest_report(&report);
    Ok(())
}
