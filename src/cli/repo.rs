//! Repo command - show repository metadata.

use crate::cli::output;
use crate::error::Result;
use crate::github::RepoClient;

pub async fn execute(client: &RepoClient) -> Result<()> {
    let meta = client.get_repository().await?;

    output::success(&meta.full_name);
    output::kv("private", meta.private);
    output::kv("default branch", &meta.default_branch);
    if let Some(visibility) = &meta.visibility {
        output::kv("visibility", visibility);
    }
    if let Some(description) = &meta.description {
        output::kv("description", description);
    }

    Ok(())
}
