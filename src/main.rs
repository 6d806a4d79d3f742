use clap::Parser;
use noc_oracle::cli::handle_ask_command;
use noc_oracle::cli::handle_config_command;
use noc_oracle::cli::handle_generate_manual_command;
use noc_oracle::cli::handle_ingest_command;
use noc_oracle::cli::handle_init_command;
use noc_oracle::cli::handle_serve_command;
use noc_oracle::cli::print_error;
use noc_oracle::cli::Cli;
use noc_oracle::cli::Commands;
use noc_oracle::config::AppConfig;
use noc_oracle::logging::init_logging_with_config;
use noc_oracle::logging::init_logging_with_level;
use noc_oracle::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_from(cli.config.as_deref())?;

    if cli.verbose {
        init_logging_with_level("debug")?;
    } else {
        init_logging_with_config(Some(&config))?;
    }
    tracing::debug!("Configuration loaded");

    match cli.command {
        Commands::Init => handle_init_command(&config).await,
        Commands::Ingest { manual } => handle_ingest_command(&config, manual).await,
        Commands::GenerateManual { output } => handle_generate_manual_command(&config, output).await,
        Commands::Ask { query, compare } => {
            handle_ask_command(&config, &query, compare, cli.verbose).await
        }
        Commands::Serve { host, port, cors } => {
            handle_serve_command(&config, &host, port, cors).await
        }
        Commands::Config => handle_config_command(&config),
    }
}
