//! The synchronization run: deployment outputs in, repository secrets out.

use std::path::Path;

use futures::future::join_all;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::github::SecretStore;
use crate::outputs;

/// Outcome of one synchronization run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Secret names stored successfully.
    pub set: Vec<String>,
    /// Failed uploads, with the per-secret error.
    pub failed: Vec<(String, Error)>,
    /// Remote secrets with no local counterpart. Reported, never deleted.
    pub extra_remote: Vec<String>,
}

impl SyncReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run one synchronization pass.
///
/// Input validation happens first: a bad outputs document never costs a
/// remote call. Uploads are issued as one concurrent fan-out and the run
/// always waits for every outcome — a failed upload is reported but never
/// cancels its siblings, and nothing is retried.
pub async fn run<S: SecretStore + Sync>(store: &S, outputs_path: &Path) -> Result<SyncReport> {
    let stack = outputs::load(outputs_path)?;
    let secrets = outputs::project(&stack)?;
    info!(stack = %stack.stack, count = secrets.len(), "loaded deployment outputs");

    // Warm the key cache up front; every upload needs it.
    store.public_key().await?;

    let remote = store.list_secret_names().await?;
    info!(count = remote.len(), "repository secrets listed");

    let local_names: Vec<&str> = secrets.iter().map(|s| s.name).collect();
    let extra_remote: Vec<String> = remote
        .into_iter()
        .filter(|name| !local_names.contains(&name.as_str()))
        .collect();
    if !extra_remote.is_empty() {
        info!(
            extra = ?extra_remote,
            "remote secrets not covered by the deployment outputs (left untouched)"
        );
    }

    let uploads = secrets.iter().map(|secret| async move {
        (secret.name, store.set_secret(secret.name, secret.value.as_str()).await)
    });

    let mut report = SyncReport {
        extra_remote,
        ..Default::default()
    };
    for (name, outcome) in join_all(uploads).await {
        match outcome {
            Ok(stored) => report.set.push(stored),
            Err(err) => {
                warn!(name, error = %err, "secret upload failed");
                report.failed.push((name.to_string(), err));
            }
        }
    }

    Ok(report)
}
