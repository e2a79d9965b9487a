//! gha-secrets - push CDK deployment outputs into GitHub Actions secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── sync          # Full synchronization run
//! │   ├── list          # List remote secret names
//! │   ├── set           # Seal and upload one secret
//! │   ├── repo          # Show repository metadata
//! │   └── completions   # Shell completions
//! ├── config            # Run configuration (flags + env fallback chain)
//! ├── crypto            # Sealed-box encoding (libsodium-compatible)
//! ├── github            # Secret store client (REST, cached public key)
//! ├── outputs           # cdk-outputs.json parsing and projection
//! └── sync              # Orchestrator: diff, fan-out, report
//! ```
//!
//! # Workflow
//!
//! A run loads the single-stack outputs document written by the deploy,
//! projects a fixed set of output keys into secret names, seals each value
//! with the repository's public key, and uploads them all concurrently.
//! Remote secrets with no local counterpart are reported and left alone.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;
pub mod github;
pub mod outputs;
pub mod sync;
