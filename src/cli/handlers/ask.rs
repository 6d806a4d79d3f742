//! Question answering handler

use crate::cli::output::print_baseline;
use crate::cli::output::print_info;
use crate::cli::output::print_solution;
use crate::rag::NocEngine;
use crate::AppConfig;
use crate::Result;

/// Answer one query; `compare` adds the ungrounded baseline below it
pub async fn handle_ask_command(
    config: &AppConfig,
    query: &str,
    compare: bool,
    verbose: bool,
) -> Result<()> {
    let engine = NocEngine::from_config(config).await?;

    print_info(&format!("❓ {query}"));
    println!();

    let result = engine.get_solution(query).await;
    print_solution(&result, verbose);

    if compare {
        let baseline = engine.get_baseline_response(query).await;
        print_baseline(&baseline);
    }

    Ok(())
}
