//! Sample manual authoring for demos and fresh installs

use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::llm::TextGenerator;
use crate::rag::prompts::build_manual_prompt;

pub const SAMPLE_DEVICE: &str = "Orbit-5G Base Station";
pub const SAMPLE_OPERATING_SYSTEM: &str = "NebulaOS";

/// Ask `generator` for a troubleshooting manual and write it to `output_path`.
///
/// Parent directories are created as needed. Nothing is written if generation fails.
pub async fn generate_manual(generator: &dyn TextGenerator, output_path: &Path) -> Result<usize> {
    info!(
        "Generating troubleshooting manual for {} running {}",
        SAMPLE_DEVICE, SAMPLE_OPERATING_SYSTEM
    );

    let prompt = build_manual_prompt(SAMPLE_DEVICE, SAMPLE_OPERATING_SYSTEM);
    let content = generator.generate(&prompt).await?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(output_path, &content).await?;

    info!(
        "Manual written to {} ({} bytes)",
        output_path.display(),
        content.len()
    );
    Ok(content.len())
}
