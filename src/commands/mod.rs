//! Command implementations
//!
//! Commands are `impl Repository` blocks, split into two groups:
//!
//! - `plumbing`: direct object access (hash-object, cat-file)
//! - `porcelain`: the version control workflow (init, add, commit, log, show)
//!
//! Commands write their results to the repository writer and return
//! `anyhow::Result`; typed [`RepositoryError`](crate::errors::RepositoryError)s
//! stay reachable through downcasting.

pub mod plumbing;
pub mod porcelain;
