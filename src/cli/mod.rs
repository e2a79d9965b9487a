//! Command-line interface.

pub mod completions;
pub mod list;
pub mod output;
pub mod repo;
pub mod set;
pub mod sync;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Config;
use crate::error::Result;
use crate::github::RepoClient;

/// gha-secrets - push deployment outputs into GitHub Actions secrets.
#[derive(Parser)]
#[command(
    name = "gha-secrets",
    about = "Push CDK deployment outputs into GitHub Actions secrets",
    version
)]
pub struct Cli {
    /// Repository owner (falls back to $OWNER, then $USERNAME)
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Repository name (falls back to $REPO)
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// API token (falls back to $PERSONAL_ACCESS_TOKEN, then $GITHUB_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to the generated deployment outputs document
    #[arg(long, global = true)]
    pub outputs: Option<PathBuf>,

    /// Base URL of the GitHub API (for GHES or testing)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Push the deployment outputs to the repository as Actions secrets
    Sync,

    /// List the names of the repository's existing secrets
    List,

    /// Seal and upload a single secret
    Set {
        /// Secret name (e.g., CLUSTER_ARN)
        name: String,
        /// Secret value
        value: String,
    },

    /// Show repository metadata
    Repo,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Dispatch a parsed command line.
pub async fn execute(cli: Cli) -> Result<()> {
    // Completions need no configuration or network.
    if let Command::Completions { shell } = &cli.command {
        completions::execute(*shell);
        return Ok(());
    }

    let config = Config::resolve(&cli)?;
    let client = RepoClient::new(&config)?;

    match &cli.command {
        Command::Sync => sync::execute(&client, &config).await,
        Command::List => list::execute(&client, &config).await,
        Command::Set { name, value } => set::execute(&client, name, value).await,
        Command::Repo => repo::execute(&client).await,
        Command::Completions { .. } => Ok(()), // handled above
    }
}
