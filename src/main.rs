//! gha-secrets - push CDK deployment outputs into GitHub Actions secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gha_secrets::cli::output;
use gha_secrets::cli::{execute, Cli};
use gha_secrets::error::Error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GHA_SECRETS_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gha_secrets=debug")
        } else {
            EnvFilter::new("gha_secrets=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli).await {
        let suggestion = match &e {
            Error::MissingConfig(_) => {
                Some("pass --owner/--repo/--token or set OWNER, REPO and PERSONAL_ACCESS_TOKEN")
            }
            Error::MissingOutputFile(_) => {
                Some("run the deploy first, or point --outputs at the generated document")
            }
            Error::Pagination { .. } => Some("the listing needs paging; prune unused secrets"),
            _ => None,
        };

        let code = e.exit_code();
        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(code);
    }
}
