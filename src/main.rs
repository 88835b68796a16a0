//! # Schema Registry CLI
//!
//! Command-line helpers for a Confluent-compatible Schema Registry.
//!
//! ## Quick Start
//!
//! ```bash
//! export SCHEMA_REGISTRY_URL=https://psrc-xxxx.confluent.cloud
//! export SCHEMA_REGISTRY_API_KEY=...
//! export SCHEMA_REGISTRY_API_SECRET=...
//!
//! # Delete every subject living in the `staging` context
//! sr-cli delete-context staging
//!
//! # Which schemas reference version 3 of `orders-value`?
//! sr-cli get-reference orders-value 3 --context staging
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `info`);
//! command output goes to stdout.

use clap::Parser;
use schema_registry_cli::{commands, Cli};
use tracing_subscriber::EnvFilter;

/// Main entry point for the Schema Registry CLI
///
/// Parses command-line arguments and delegates to the appropriate command handler.
/// Any error is printed with its context chain and turns into exit code 1.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap_or_else(|| {
        eprintln!("No command provided. Use --help to see available commands.");
        std::process::exit(1);
    });

    if let Err(e) = commands::run(cmd).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
