//! List command - show the repository's current secret names.

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;
use crate::github::{RepoClient, SecretStore};

pub async fn execute(client: &RepoClient, config: &Config) -> Result<()> {
    let names = client.list_secret_names().await?;

    if names.is_empty() {
        output::warn(&format!("{}/{} has no secrets", config.owner, config.repo));
        return Ok(());
    }

    output::success(&format!(
        "{}/{} has {} secret(s)",
        config.owner,
        config.repo,
        names.len()
    ));
    for name in names {
        println!("  {}", name);
    }

    Ok(())
}
