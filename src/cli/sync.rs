//! Sync command - push deployment outputs to the repository.

use tracing::info;

use crate::cli::output;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::RepoClient;

pub async fn execute(client: &RepoClient, config: &Config) -> Result<()> {
    info!(owner = %config.owner, repo = %config.repo, "updating secrets");

    let report = crate::sync::run(client, &config.outputs_path).await?;

    if !report.extra_remote.is_empty() {
        output::warn(&format!(
            "{} remote secret(s) not covered by the deployment outputs: {}",
            report.extra_remote.len(),
            report.extra_remote.join(", ")
        ));
    }

    for name in &report.set {
        output::success(&format!("set {}", name));
    }
    for (name, err) in &report.failed {
        output::error(&format!("{}: {}", name, err));
    }

    if report.is_success() {
        output::success(&format!(
            "synced {} secrets to {}/{}",
            report.set.len(),
            config.owner,
            config.repo
        ));
        Ok(())
    } else {
        Err(Error::PartialSync {
            failed: report.failed.len(),
            total: report.failed.len() + report.set.len(),
        })
    }
}
