//! # Schema Registry CLI Library
//!
//! Core library functionality for the `sr-cli` tool: a typed client for the
//! subset of the Schema Registry REST API the commands use, context-aware
//! subject filtering, and the command handlers themselves.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod subject;

pub use error::RegistryError;
pub use registry::{RegistryClient, SchemaRegistryApi, VersionRecord};

/// CLI tool for bulk operations against a Confluent-compatible Schema Registry
///
/// Connection details are read from `SCHEMA_REGISTRY_URL`,
/// `SCHEMA_REGISTRY_API_KEY` and `SCHEMA_REGISTRY_API_SECRET`.
#[derive(Parser)]
#[command(
    name = "sr-cli",
    version,
    about = "CLI tool for Schema Registry context cleanup and reference lookups",
    long_about = "A small Rust command-line tool for a Confluent-compatible Schema Registry.\n\nDeletes every subject of a context in one go and resolves which schemas reference a\ngiven subject version.\n\nEnv:\n  SCHEMA_REGISTRY_URL, SCHEMA_REGISTRY_API_KEY, SCHEMA_REGISTRY_API_SECRET\n  RUST_LOG (default info)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<commands::Commands>,
}
