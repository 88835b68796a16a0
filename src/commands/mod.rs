use anyhow::Result;
use clap::Subcommand;

use crate::constants::DEFAULT_CONTEXT;

pub mod completions;
pub mod delete_context;
pub mod get_reference;

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Delete every subject that belongs to the given context")]
    DeleteContext {
        /// Context name, matched exactly against `:<context>:<subject>`
        context_name: String,
    },
    #[command(about = "List the schemas referencing a subject version as id => subject-version")]
    GetReference {
        /// Subject name (may contain `/`)
        subject_name: String,
        /// Version number, or `latest`
        version_id: String,
        /// Context to resolve in
        #[arg(short, long, default_value = DEFAULT_CONTEXT)]
        context: String,
    },
    #[command(about = "Emit shell completion scripts (bash/zsh/fish)")]
    Completions { shell: String },
}

pub async fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::DeleteContext { context_name } => delete_context::run(context_name).await,
        Commands::GetReference {
            subject_name,
            version_id,
            context,
        } => get_reference::run(subject_name, version_id, context).await,
        Commands::Completions { shell } => completions::run(shell),
    }
}
