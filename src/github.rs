//! GitHub Actions secret store client.
//!
//! One `RepoClient` is scoped to a single `owner/repo` and a single run. The
//! repository public key is fetched at most once per client and held in a
//! single-flight cell, so concurrent first callers share one request.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::crypto;
use crate::error::{Error, Result};

/// One page covers repositories with up to this many secrets; more is a hard
/// error rather than a silent truncation.
const PAGE_SIZE: u32 = 100;

/// Repository descriptor, narrowed to the fields the tool reports.
#[derive(Debug, Deserialize)]
pub struct RepoMetadata {
    pub full_name: String,
    pub private: bool,
    pub default_branch: String,
    pub description: Option<String>,
    pub visibility: Option<String>,
}

/// Per-repository public encryption key. Immutable for the life of a run;
/// rotated only by the remote service, out of band.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoPublicKey {
    pub key_id: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct SecretList {
    total_count: u32,
    secrets: Vec<SecretName>,
}

#[derive(Debug, Deserialize)]
struct SecretName {
    name: String,
}

/// The store operations the sync orchestrator drives.
#[async_trait]
pub trait SecretStore {
    /// Repository public key, cached after the first fetch.
    async fn public_key(&self) -> Result<RepoPublicKey>;

    /// Names of every secret currently on the repository.
    async fn list_secret_names(&self) -> Result<Vec<String>>;

    /// Seal `value` for the repository key and create or update the secret,
    /// returning its name.
    async fn set_secret(&self, name: &str, value: &str) -> Result<String>;
}

pub struct RepoClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
    owner: String,
    repo: String,
    public_key: OnceCell<RepoPublicKey>,
}

impl RepoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gha-secrets/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            public_key: OnceCell::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}{}", self.api_base, self.owner, self.repo, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.url(path))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
    }

    /// Fetch the repository descriptor.
    pub async fn get_repository(&self) -> Result<RepoMetadata> {
        debug!(owner = %self.owner, repo = %self.repo, "fetching repository metadata");
        let response = self.get("").send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "repository lookup failed");
            return Err(Error::NotFound {
                owner: self.owner.clone(),
                repo: self.repo.clone(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    async fn fetch_public_key(&self) -> Result<RepoPublicKey> {
        debug!(owner = %self.owner, repo = %self.repo, "fetching repository public key");
        let response = self.get("/actions/secrets/public-key").send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "public key fetch failed");
            return Err(Error::KeyFetch {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SecretStore for RepoClient {
    async fn public_key(&self) -> Result<RepoPublicKey> {
        self.public_key
            .get_or_try_init(|| self.fetch_public_key())
            .await
            .cloned()
    }

    async fn list_secret_names(&self) -> Result<Vec<String>> {
        let response = self
            .get("/actions/secrets")
            .query(&[("per_page", PAGE_SIZE)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "secret listing failed");
            return Err(Error::List {
                status: status.as_u16(),
                body,
            });
        }

        let list: SecretList = response.json().await?;
        if list.total_count as usize > list.secrets.len() {
            return Err(Error::Pagination {
                total: list.total_count,
                fetched: list.secrets.len(),
            });
        }

        Ok(list.secrets.into_iter().map(|s| s.name).collect())
    }

    async fn set_secret(&self, name: &str, value: &str) -> Result<String> {
        // Input check happens before any network traffic.
        if value.is_empty() {
            return Err(Error::EmptyValue(name.to_string()));
        }

        let key = self.public_key().await?;
        let encrypted_value = crypto::encode(value, &key.key)?;

        let response = self
            .http
            .put(self.url(&format!("/actions/secrets/{}", name)))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .json(&json!({
                "encrypted_value": encrypted_value,
                "key_id": key.key_id,
            }))
            .send()
            .await?;

        let status = response.status();
        match status {
            // 201 created, 204 updated
            StatusCode::CREATED | StatusCode::NO_CONTENT => {
                info!(name, "secret stored");
                Ok(name.to_string())
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                error!(name, %status, body = %body, "secret upload failed");
                Err(Error::SetSecret {
                    name: name.to_string(),
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
