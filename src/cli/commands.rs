//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "noc-oracle")]
#[command(about = "Runbook assistant for Orbit-5G alarms, grounded in the troubleshooting manual")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the passage table and enable pgvector
    Init,
    /// Rebuild the vector index from the troubleshooting manual
    Ingest {
        /// Manual to ingest (default: ingest.manual_path from config)
        #[arg(short, long)]
        manual: Option<PathBuf>,
    },
    /// Generate a sample troubleshooting manual with the configured LLM
    GenerateManual {
        /// Output file (default: ingest.manual_path from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Ask for the resolution of an alarm
    Ask {
        /// Question, e.g. "How do I fix S-304?"
        query: String,
        /// Also show the ungrounded baseline answer
        #[arg(long)]
        compare: bool,
    },
    /// Start the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Enable CORS
        #[arg(long)]
        cors: bool,
    },
    /// Show the effective configuration with secrets masked
    Config,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ask_with_compare() {
        let cli = Cli::try_parse_from([
            "noc-oracle",
            "ask",
            "How to fix S-304?",
            "--compare",
            "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Ask { query, compare } => {
                assert_eq!(query, "How to fix S-304?");
                assert!(compare);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "noc-oracle",
            "ingest",
            "--manual",
            "manual.md",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(
            cli.command,
            Commands::Ingest { manual: Some(ref p) } if p == &PathBuf::from("manual.md")
        ));
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["noc-oracle", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { host, port, cors } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 3000);
                assert!(!cors);
            }
            _ => panic!("expected serve"),
        }
    }
}
