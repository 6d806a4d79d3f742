//! Sample manual generation handler

use std::path::PathBuf;

use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::llm::LlmService;
use crate::manual::generate_manual;
use crate::manual::SAMPLE_DEVICE;
use crate::AppConfig;
use crate::Result;

pub async fn handle_generate_manual_command(
    config: &AppConfig,
    output: Option<PathBuf>,
) -> Result<()> {
    let output_path = output.unwrap_or_else(|| config.manual_path().to_path_buf());
    let llm_service = LlmService::new(config)?;

    print_info(&format!(
        "✍️  Generating {} manual with {} ({})...",
        SAMPLE_DEVICE,
        llm_service.provider(),
        llm_service.model()
    ));

    let bytes = generate_manual(&llm_service, &output_path).await?;
    print_success(&format!(
        "Manual saved to {} ({bytes} bytes)",
        output_path.display()
    ));
    Ok(())
}
