//! Run configuration: repository scope, credential, and file locations.
//!
//! Everything the run needs is resolved up front into one explicit struct;
//! nothing downstream reads the environment.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Where the deploy step writes its outputs document.
pub const DEFAULT_OUTPUTS_PATH: &str = "../secrets/cdk-outputs.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub token: String,
    pub outputs_path: PathBuf,
    pub api_base: String,
}

impl Config {
    /// Resolve configuration from CLI flags with environment fallback.
    ///
    /// The fallback chain mirrors the deploy scripts that drive this tool:
    /// owner comes from `OWNER`, else `USERNAME`; the credential from
    /// `PERSONAL_ACCESS_TOKEN`, else `GITHUB_TOKEN`; the repository from
    /// `REPO`. Empty variables count as unset.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::resolve_from(cli, |name| std::env::var(name).ok())
    }

    fn resolve_from(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |name: &str| env(name).filter(|v| !v.is_empty());

        let owner = cli
            .owner
            .clone()
            .or_else(|| lookup("OWNER"))
            .or_else(|| lookup("USERNAME"))
            .ok_or(Error::MissingConfig("owner"))?;

        let repo = cli
            .repo
            .clone()
            .or_else(|| lookup("REPO"))
            .ok_or(Error::MissingConfig("repo"))?;

        let token = cli
            .token
            .clone()
            .or_else(|| lookup("PERSONAL_ACCESS_TOKEN"))
            .or_else(|| lookup("GITHUB_TOKEN"))
            .ok_or(Error::MissingConfig("token"))?;

        let outputs_path = cli
            .outputs
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUTS_PATH));

        let api_base = cli
            .api_base
            .clone()
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            owner,
            repo,
            token,
            outputs_path,
            api_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["gha-secrets"];
        argv.extend(args);
        argv.push("sync");
        Cli::parse_from(argv)
    }

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_flags_take_priority_over_env() {
        let env = env_of(&[("OWNER", "env-owner"), ("REPO", "env-repo")]);
        let cli = cli(&["--owner", "flag-owner", "--repo", "r", "--token", "t"]);

        let config = Config::resolve_from(&cli, |k| env.get(k).cloned()).unwrap();
        assert_eq!(config.owner, "flag-owner");
        assert_eq!(config.repo, "r");
    }

    #[test]
    fn test_owner_falls_back_to_username() {
        let env = env_of(&[
            ("USERNAME", "fallback-user"),
            ("REPO", "r"),
            ("PERSONAL_ACCESS_TOKEN", "t"),
        ]);
        let cli = cli(&[]);

        let config = Config::resolve_from(&cli, |k| env.get(k).cloned()).unwrap();
        assert_eq!(config.owner, "fallback-user");
    }

    #[test]
    fn test_empty_env_var_counts_as_unset() {
        let env = env_of(&[
            ("OWNER", ""),
            ("USERNAME", "fallback-user"),
            ("REPO", "r"),
            ("GITHUB_TOKEN", "t"),
        ]);
        let cli = cli(&[]);

        let config = Config::resolve_from(&cli, |k| env.get(k).cloned()).unwrap();
        assert_eq!(config.owner, "fallback-user");
        assert_eq!(config.token, "t");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let env = env_of(&[("OWNER", "o"), ("REPO", "r")]);
        let cli = cli(&[]);

        let result = Config::resolve_from(&cli, |k| env.get(k).cloned());
        assert!(matches!(result, Err(Error::MissingConfig("token"))));
    }

    #[test]
    fn test_defaults() {
        let env = env_of(&[("OWNER", "o"), ("REPO", "r"), ("GITHUB_TOKEN", "t")]);
        let cli = cli(&[]);

        let config = Config::resolve_from(&cli, |k| env.get(k).cloned()).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.outputs_path, PathBuf::from(DEFAULT_OUTPUTS_PATH));
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let env = env_of(&[("OWNER", "o"), ("REPO", "r"), ("GITHUB_TOKEN", "t")]);
        let cli = cli(&["--api-base", "http://127.0.0.1:9999/"]);

        let config = Config::resolve_from(&cli, |k| env.get(k).cloned()).unwrap();
        assert_eq!(config.api_base, "http://127.0.0.1:9999");
    }
}
