//! Set command - seal and upload a single secret.

use crate::cli::output;
use crate::error::Result;
use crate::github::{RepoClient, SecretStore};

pub async fn execute(client: &RepoClient, name: &str, value: &str) -> Result<()> {
    let stored = client.set_secret(name, value).await?;
    output::success(&format!("set {}", stored));
    Ok(())
}
