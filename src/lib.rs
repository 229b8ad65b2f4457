//! groot: a small content-addressed version control core
//!
//! - `areas`: persistent repository areas (object database, staging index, HEAD, workspace)
//! - `artifacts`: object types and algorithms (digests, commits, line diff, history walk)
//! - `commands`: plumbing and porcelain commands implemented on `Repository`
//! - `config`: repository location settings
//! - `errors`: the error taxonomy shared by every area

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
