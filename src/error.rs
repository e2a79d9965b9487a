use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("repository not found: {owner}/{repo} (status {status}): {body}")]
    NotFound {
        owner: String,
        repo: String,
        status: u16,
        body: String,
    },

    #[error("failed to fetch repository public key (status {status}): {body}")]
    KeyFetch { status: u16, body: String },

    #[error("secret listing incomplete: repository reports {total} secrets but one page holds {fetched}")]
    Pagination { total: u32, fetched: usize },

    #[error("failed to list secrets (status {status}): {body}")]
    List { status: u16, body: String },

    #[error("no value for secret {0}")]
    EmptyValue(String),

    #[error("failed to set secret {name} (status {status}): {body}")]
    SetSecret {
        name: String,
        status: u16,
        body: String,
    },

    #[error("{failed} of {total} secret uploads failed")]
    PartialSync { failed: usize, total: usize },

    #[error("outputs file not found: {}", .0.display())]
    MissingOutputFile(PathBuf),

    #[error("expected exactly one stack in the outputs file, found {0}")]
    AmbiguousStack(usize),

    #[error("stack {stack} has no value for output key {key}")]
    MissingOutputKey { stack: String, key: String },

    #[error("encryption failed: {0}")]
    Encoding(String),

    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error, one per fatal class so CI wrappers
    /// can tell configuration mistakes from remote failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingConfig(_) => 2,
            Error::NotFound { .. } => 10,
            Error::KeyFetch { .. } => 11,
            Error::Pagination { .. } => 12,
            Error::List { .. } => 13,
            Error::EmptyValue(_) => 14,
            Error::SetSecret { .. } => 15,
            Error::PartialSync { .. } => 16,
            Error::MissingOutputFile(_) => 20,
            Error::AmbiguousStack(_) => 21,
            Error::MissingOutputKey { .. } => 22,
            Error::Encoding(_) => 30,
            Error::Http(_) => 40,
            Error::Io(_) => 41,
            Error::Json(_) => 42,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
